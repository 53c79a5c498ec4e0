//! Release workflow orchestration
//!
//! Runs the pipeline end to end:
//!
//! ```text
//! CheckClean → CaptureOriginal → DetectProject → ReadCurrent
//!   → CollectIntent → ComputeNew → ConfirmBranchName
//!   → CreateBranch → WriteManifest → StageManifest → Commit
//! ```
//!
//! Nothing touches the repository before `CreateBranch`. A failure after the
//! branch exists switches back to the original branch; the release branch is
//! left in place and no files are reset or restored.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::boundary::BoundaryWarning;
use crate::domain::{branch, version, Intent, ReleasePlan};
use crate::error::BumpError;
use crate::git::GitPort;
use crate::manifest;
use crate::ui::{self, Wizard};

/// Pipeline steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    CheckClean,
    CaptureOriginal,
    DetectProject,
    ReadCurrent,
    CollectIntent,
    ComputeNew,
    ConfirmBranchName,
    CreateBranch,
    WriteManifest,
    StageManifest,
    Commit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Released { intent: Intent, plan: ReleasePlan },
    Cancelled,
}

/// Result of the rollback attempted after a post-branch failure
#[derive(Debug)]
pub enum Compensation {
    /// Failure happened before the repository was touched
    NotNeeded,
    /// HEAD is back on the original branch
    Restored { original: String },
    /// Checkout of the original branch failed too
    Failed {
        branch: String,
        original: String,
        error: BumpError,
    },
}

/// A failed run: the primary error, where it happened, and the rollback result
#[derive(Debug)]
pub struct PipelineFailure {
    pub stage: Stage,
    pub error: BumpError,
    pub compensation: Compensation,
}

impl PipelineFailure {
    fn untouched(stage: Stage, error: BumpError) -> Self {
        PipelineFailure {
            stage,
            error,
            compensation: Compensation::NotNeeded,
        }
    }

    /// Warning to show when the user was left on the release branch
    pub fn stranded_warning(&self) -> Option<BoundaryWarning> {
        match &self.compensation {
            Compensation::Failed {
                branch,
                original,
                error,
            } => Some(BoundaryWarning::StrandedOnBranch {
                branch: branch.clone(),
                original: original.clone(),
                reason: error.to_string(),
            }),
            _ => None,
        }
    }
}

/// Drives the release pipeline against a git port and a wizard.
pub struct ReleaseOrchestrator<'a, G: GitPort, W: Wizard> {
    git: &'a G,
    wizard: &'a mut W,
    work_dir: PathBuf,
    clock: fn() -> DateTime<Utc>,
}

impl<'a, G: GitPort, W: Wizard> ReleaseOrchestrator<'a, G, W> {
    /// `work_dir` is probed for the manifest; it should be the repository root.
    pub fn new(git: &'a G, wizard: &'a mut W, work_dir: impl Into<PathBuf>) -> Self {
        ReleaseOrchestrator {
            git,
            wizard,
            work_dir: work_dir.into(),
            clock: Utc::now,
        }
    }

    /// Replace the wall clock used for date-based versions
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Run the whole pipeline.
    ///
    /// # Returns
    /// * `Ok(Outcome::Released)` - The release branch and commit exist
    /// * `Ok(Outcome::Cancelled)` - The user aborted; nothing was changed
    /// * `Err(PipelineFailure)` - A step failed; see its `compensation`
    pub fn run(&mut self) -> Result<Outcome, PipelineFailure> {
        let fail = |stage: Stage| move |error: BumpError| PipelineFailure::untouched(stage, error);

        let clean = self.git.is_clean().map_err(fail(Stage::CheckClean))?;
        if !clean {
            return Err(fail(Stage::CheckClean)(BumpError::DirtyWorkingTree));
        }

        let original = self
            .git
            .current_branch()
            .map_err(fail(Stage::CaptureOriginal))?;
        ui::display_status(&format!("Current branch: {}", original));

        let location = manifest::detect_in(&self.work_dir);
        tracing::info!(kind = %location.kind(), "project detected");

        let current_version =
            manifest::read_version(&location).map_err(fail(Stage::ReadCurrent))?;
        ui::display_status(&format!("Current version: {}", current_version));

        let Some(bump) = self
            .wizard
            .collect_intent(&current_version)
            .map_err(fail(Stage::CollectIntent))?
        else {
            return Ok(Outcome::Cancelled);
        };

        let new_version = version::next_version_at(&current_version, bump, (self.clock)())
            .map_err(fail(Stage::ComputeNew))?;
        if bump != version::BumpKind::Date && version::has_metadata(&current_version) {
            ui::display_boundary_warning(&BoundaryWarning::PrereleaseDropped {
                current: current_version.clone(),
                next: new_version.clone(),
            });
        }
        ui::display_version_change(&current_version, &new_version);

        let suggested = branch::default_branch_name(&new_version);
        let Some(answer) = self
            .wizard
            .confirm_branch_name(&new_version, &suggested)
            .map_err(fail(Stage::ConfirmBranchName))?
        else {
            return Ok(Outcome::Cancelled);
        };

        let intent = Intent::new(
            bump,
            branch::resolve_branch_name(&answer, &new_version),
        );
        let plan = ReleasePlan {
            manifest: location,
            current_version,
            new_version,
            branch_name: intent.branch_name.clone(),
        };
        tracing::info!(scheme = %intent.scheme, bump = %intent.bump, branch = %plan.branch_name, "release planned");

        ui::display_status(&format!("Creating branch: {}", plan.branch_name));
        self.git
            .create_branch(&plan.branch_name)
            .map_err(fail(Stage::CreateBranch))?;

        if let Err((stage, error)) = self.apply(&plan) {
            let compensation = self.compensate(&original, &plan.branch_name);
            return Err(PipelineFailure {
                stage,
                error,
                compensation,
            });
        }

        Ok(Outcome::Released { intent, plan })
    }

    /// Write, stage, and commit on the freshly created release branch.
    fn apply(&self, plan: &ReleasePlan) -> Result<(), (Stage, BumpError)> {
        let manifest_name = plan.manifest.display_name();

        ui::display_status(&format!(
            "Updating {} from {} to {}",
            manifest_name, plan.current_version, plan.new_version
        ));
        manifest::write_version(&plan.manifest, &plan.current_version, &plan.new_version)
            .map_err(|e| (Stage::WriteManifest, e))?;

        ui::display_status(&format!("Staging {}", manifest_name));
        self.git
            .stage(plan.manifest.path())
            .map_err(|e| (Stage::StageManifest, e))?;

        let message = plan.commit_message();
        ui::display_status(&format!("Committing: {}", message));
        self.git
            .commit(&message)
            .map_err(|e| (Stage::Commit, e))?;

        Ok(())
    }

    fn compensate(&self, original: &str, release_branch: &str) -> Compensation {
        match self.git.checkout(original) {
            Ok(()) => {
                tracing::info!(branch = original, "switched back to original branch");
                Compensation::Restored {
                    original: original.to_string(),
                }
            }
            Err(error) => {
                tracing::warn!(branch = release_branch, original, error = %error, "rollback checkout failed");
                Compensation::Failed {
                    branch: release_branch.to_string(),
                    original: original.to_string(),
                    error,
                }
            }
        }
    }
}
