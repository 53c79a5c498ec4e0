use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git working directory is not clean. Please commit or stash changes.")]
    DirtyWorkingTree,

    #[error("Currently in detached HEAD state; check out a branch first")]
    DetachedHead,

    #[error("Could not detect project type: no mix.exs or package.json in the current directory")]
    UnknownProjectKind,

    #[error("Could not find version string pattern in {}", path.display())]
    PatternNotFound { path: PathBuf },

    #[error("Failed to parse existing version '{version}': {reason}")]
    UnparseableVersion { version: String, reason: String },

    #[error("Failed to replace version string in {}; content was unchanged", path.display())]
    SubstitutionMissed { path: PathBuf },

    #[error("git {command} failed:\n{output}")]
    GitInvocationFailed { command: String, output: String },

    #[error("I/O error on {}: {source}", path.display())]
    FilesystemIO {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

/// Convenience type alias for Results in bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a git failure carrying the command's captured output
    pub fn git(command: impl Into<String>, output: impl Into<String>) -> Self {
        BumpError::GitInvocationFailed {
            command: command.into(),
            output: output.into(),
        }
    }

    /// Wrap an I/O error with the manifest path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        BumpError::FilesystemIO {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn unparseable(version: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::UnparseableVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    pub fn prompt(msg: impl Into<String>) -> Self {
        BumpError::Prompt(msg.into())
    }
}
