use std::fmt;

/// Non-fatal conditions around the release pipeline that should be reported
/// to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A semver bump discarded pre-release or build metadata
    PrereleaseDropped { current: String, next: String },
    /// Rollback could not switch back; the user is left on the release branch
    StrandedOnBranch {
        branch: String,
        original: String,
        reason: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::PrereleaseDropped { current, next } => {
                write!(
                    f,
                    "Pre-release/build metadata of '{}' is dropped; next version is '{}'",
                    current, next
                )
            }
            BoundaryWarning::StrandedOnBranch {
                branch,
                original,
                reason,
            } => {
                write!(
                    f,
                    "Failed to switch back to original branch '{}': {}. You are still on branch '{}'",
                    original,
                    reason.trim_end(),
                    branch
                )
            }
        }
    }
}
