//! Git operations abstraction layer
//!
//! The release pipeline talks to git only through the [GitPort] trait, so
//! the orchestrator can run against the real `git` executable or against an
//! in-memory double in tests.
//!
//! - [system::SystemGit]: shells out to `git` on `PATH`
//! - [mock::MockGit]: records calls and simulates branch state
//!
//! Every operation is synchronous and blocking. Failures carry the combined
//! stdout and stderr of the git invocation verbatim.

pub mod mock;
pub mod system;

pub use mock::MockGit;
pub use system::SystemGit;

use std::path::Path;

use crate::error::Result;

/// The git surface used by the release pipeline
///
/// | Operation        | Invocation                     |
/// |------------------|--------------------------------|
/// | `is_clean`       | `git status --porcelain`       |
/// | `current_branch` | `git rev-parse --abbrev-ref HEAD` |
/// | `create_branch`  | `git checkout -b <name>`       |
/// | `checkout`       | `git checkout <name>`          |
/// | `stage`          | `git add <path>`               |
/// | `commit`         | `git commit -m <message>`      |
pub trait GitPort {
    /// True when `status --porcelain` reports nothing
    fn is_clean(&self) -> Result<bool>;

    /// Name of the checked out branch
    ///
    /// Fails with [crate::error::BumpError::DetachedHead] when HEAD is detached.
    fn current_branch(&self) -> Result<String>;

    /// Create `name` off the current HEAD and switch to it
    fn create_branch(&self, name: &str) -> Result<()>;

    /// Switch to an existing branch
    fn checkout(&self, name: &str) -> Result<()>;

    /// Stage a single path
    fn stage(&self, path: &Path) -> Result<()>;

    /// Commit whatever is staged
    fn commit(&self, message: &str) -> Result<()>;
}
