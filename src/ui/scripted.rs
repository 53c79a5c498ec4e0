use crate::domain::BumpKind;
use crate::error::Result;
use crate::ui::Wizard;

/// Wizard that replays fixed answers instead of prompting.
///
/// `None` at either step behaves like the user aborting there. What the
/// pipeline showed the user is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedWizard {
    bump: Option<BumpKind>,
    branch_name: Option<String>,
    pub shown_current: Option<String>,
    pub shown_new_version: Option<String>,
    pub shown_suggestion: Option<String>,
}

impl ScriptedWizard {
    /// Choose `bump` and accept the suggested branch name
    pub fn choosing(bump: BumpKind) -> Self {
        ScriptedWizard {
            bump: Some(bump),
            branch_name: Some(String::new()),
            ..Default::default()
        }
    }

    /// Abort at the scheme menu
    pub fn cancelling() -> Self {
        ScriptedWizard::default()
    }

    /// Answer the branch prompt with `name` instead of accepting the default
    pub fn with_branch_name(mut self, name: impl Into<String>) -> Self {
        self.branch_name = Some(name.into());
        self
    }

    /// Abort at the branch name prompt
    pub fn cancelling_at_branch(mut self) -> Self {
        self.branch_name = None;
        self
    }
}

impl Wizard for ScriptedWizard {
    fn collect_intent(&mut self, current_version: &str) -> Result<Option<BumpKind>> {
        self.shown_current = Some(current_version.to_string());
        Ok(self.bump)
    }

    fn confirm_branch_name(
        &mut self,
        new_version: &str,
        suggested: &str,
    ) -> Result<Option<String>> {
        self.shown_new_version = Some(new_version.to_string());
        self.shown_suggestion = Some(suggested.to_string());
        Ok(self.branch_name.clone())
    }
}
