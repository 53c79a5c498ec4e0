use crate::domain::project::ManifestLocation;
use crate::domain::version::{BumpKind, Scheme};

/// What the user asked for in the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub scheme: Scheme,
    pub bump: BumpKind,
    pub branch_name: String,
}

impl Intent {
    /// The scheme is derived from the bump, so a date-based intent always
    /// carries `BumpKind::Date` and a semver intent never does.
    pub fn new(bump: BumpKind, branch_name: impl Into<String>) -> Self {
        Intent {
            scheme: bump.scheme(),
            bump,
            branch_name: branch_name.into(),
        }
    }
}

/// Everything needed before the repository is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub manifest: ManifestLocation,
    pub current_version: String,
    pub new_version: String,
    pub branch_name: String,
}

impl ReleasePlan {
    /// Message of the release commit, e.g. `version bump 1.2.4`
    pub fn commit_message(&self) -> String {
        format!("version bump {}", self.new_version)
    }
}
