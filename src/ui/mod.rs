//! User interface module - the release wizard and output formatting.
//!
//! - `formatter` - Pure formatting functions
//! - `scripted` - Non-interactive wizard with canned answers
//! - This module - The [Wizard] contract and its interactive terminal implementation

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::domain::branch::check_branch_input;
use crate::domain::{BumpKind, Scheme};
use crate::error::{BumpError, Result};

pub mod formatter;
pub mod scripted;

pub use formatter::{
    display_boundary_warning, display_cancelled, display_error, display_release_summary,
    display_status, display_success, display_version_change,
};
pub use scripted::ScriptedWizard;

/// Interactive picker supplying the user's release intent.
///
/// Each call blocks until the user answers. `Ok(None)` means the user
/// aborted; the pipeline then stops without touching the repository.
pub trait Wizard {
    /// Ask for the versioning scheme and, for semver, the bump kind.
    ///
    /// Returns `BumpKind::Date` for the date-based scheme.
    fn collect_intent(&mut self, current_version: &str) -> Result<Option<BumpKind>>;

    /// Ask for the release branch name, pre-filled with `suggested`.
    ///
    /// An empty answer is allowed and means "use the default".
    fn confirm_branch_name(&mut self, new_version: &str, suggested: &str)
        -> Result<Option<String>>;
}

/// Wizard driven by arrow-key menus and a line editor on the terminal.
///
/// Esc or `q` in a menu, or Ctrl+C anywhere, cancels.
pub struct TerminalWizard {
    theme: ColorfulTheme,
}

impl TerminalWizard {
    pub fn new() -> Self {
        TerminalWizard {
            theme: ColorfulTheme::default(),
        }
    }

    fn select<T: ToString>(&self, prompt: &str, items: &[T]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt();
        cancel_on_interrupt(choice.map_err(prompt_io_error))
            .map(Option::flatten)
    }
}

impl Default for TerminalWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard for TerminalWizard {
    fn collect_intent(&mut self, current_version: &str) -> Result<Option<BumpKind>> {
        let prompt = format!("Version scheme? (current: {})", current_version);
        let Some(index) = self.select(&prompt, &Scheme::ALL)? else {
            return Ok(None);
        };

        match Scheme::ALL[index] {
            Scheme::DateBased => Ok(Some(BumpKind::Date)),
            Scheme::Semver => {
                let choice = self.select("Select SemVer bump type", &BumpKind::SEMVER)?;
                Ok(choice.map(|i| BumpKind::SEMVER[i]))
            }
        }
    }

    fn confirm_branch_name(
        &mut self,
        new_version: &str,
        suggested: &str,
    ) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Enter branch name (version will be {})", new_version))
            .with_initial_text(suggested)
            .allow_empty(true)
            .validate_with(|input: &String| check_branch_input(input))
            .interact_text();

        cancel_on_interrupt(answer.map_err(prompt_io_error))
    }
}

fn prompt_io_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}

/// Ctrl+C surfaces as an interrupted read; treat it as cancellation.
fn cancel_on_interrupt<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(BumpError::prompt(e.to_string())),
    }
}
