use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{BumpError, Result};
use crate::git::GitPort;

/// Git backend using the system `git` executable
///
/// Commands run in `work_dir` and inherit the parent environment, so user
/// `.gitconfig`, hooks, and signing settings apply as they would on the
/// command line.
pub struct SystemGit {
    work_dir: PathBuf,
}

impl SystemGit {
    /// Operate on the repository at `path`
    pub fn at(path: impl Into<PathBuf>) -> Self {
        SystemGit {
            work_dir: path.into(),
        }
    }

    /// Run git with `args`, returning the combined output on success.
    ///
    /// stdout is followed by stderr in the returned buffer. No stdin is
    /// attached and there is no timeout.
    fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let command = args
            .iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(command = %command, dir = %self.work_dir.display(), "running git");

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BumpError::git(&command, format!("failed to run git: {}", e)))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            tracing::debug!(command = %command, status = ?output.status.code(), "git failed");
            return Err(BumpError::git(command, combined));
        }

        Ok(combined)
    }
}

impl GitPort for SystemGit {
    fn is_clean(&self) -> Result<bool> {
        let output = self.run(["status", "--porcelain"])?;
        Ok(output.trim().is_empty())
    }

    fn current_branch(&self) -> Result<String> {
        let output = self.run(["rev-parse", "--abbrev-ref", "HEAD"])?;
        let branch = output.trim();
        if branch == "HEAD" {
            return Err(BumpError::DetachedHead);
        }
        Ok(branch.to_string())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.run(["checkout", "-b", name]).map(|_| ())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.run(["checkout", name]).map(|_| ())
    }

    fn stage(&self, path: &Path) -> Result<()> {
        self.run([OsStr::new("add"), path.as_os_str()]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(["commit", "-m", message]).map(|_| ())
    }
}
