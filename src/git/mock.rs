use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};
use crate::git::GitPort;

/// Git operations the mock can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitOp {
    IsClean,
    CurrentBranch,
    CreateBranch,
    Checkout,
    Stage,
    Commit,
}

#[derive(Debug, Default)]
struct MockState {
    head: Option<String>,
    branches: BTreeSet<String>,
    staged: Vec<PathBuf>,
    commits: Vec<(String, String)>,
    calls: Vec<String>,
}

/// Mock repository for testing without actual git operations
///
/// Tracks branches, HEAD, staged paths, and commits so tests can assert on
/// the resulting repository state as well as on the sequence of calls.
pub struct MockGit {
    clean: bool,
    failures: HashSet<GitOp>,
    after_create_branch: Option<Box<dyn Fn()>>,
    state: RefCell<MockState>,
}

impl MockGit {
    /// A clean repository with `branch` checked out
    pub fn on_branch(branch: impl Into<String>) -> Self {
        let branch = branch.into();
        let mut state = MockState::default();
        state.branches.insert(branch.clone());
        state.head = Some(branch);

        MockGit {
            clean: true,
            failures: HashSet::new(),
            after_create_branch: None,
            state: RefCell::new(state),
        }
    }

    /// A clean repository with a detached HEAD
    pub fn detached() -> Self {
        MockGit {
            clean: true,
            failures: HashSet::new(),
            after_create_branch: None,
            state: RefCell::new(MockState::default()),
        }
    }

    /// Report uncommitted changes from `is_clean`
    pub fn dirty(mut self) -> Self {
        self.clean = false;
        self
    }

    /// Make `op` fail with a git error
    pub fn failing(mut self, op: GitOp) -> Self {
        self.failures.insert(op);
        self
    }

    /// Run `hook` right after a branch is created successfully
    pub fn after_create_branch(mut self, hook: impl Fn() + 'static) -> Self {
        self.after_create_branch = Some(Box::new(hook));
        self
    }

    pub fn head(&self) -> Option<String> {
        self.state.borrow().head.clone()
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.state.borrow().branches.contains(name)
    }

    pub fn staged(&self) -> Vec<PathBuf> {
        self.state.borrow().staged.clone()
    }

    /// (branch, message) for every commit made
    pub fn commits(&self) -> Vec<(String, String)> {
        self.state.borrow().commits.clone()
    }

    /// Every git invocation in order, rendered as its argument list
    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// True if any call could have changed the repository
    pub fn mutated(&self) -> bool {
        self.calls().iter().any(|call| {
            call.starts_with("checkout") || call.starts_with("add") || call.starts_with("commit")
        })
    }

    fn record(&self, op: GitOp, call: String) -> Result<()> {
        self.state.borrow_mut().calls.push(call.clone());
        if self.failures.contains(&op) {
            return Err(BumpError::git(call, "fatal: simulated failure\n"));
        }
        Ok(())
    }
}

impl GitPort for MockGit {
    fn is_clean(&self) -> Result<bool> {
        self.record(GitOp::IsClean, "status --porcelain".to_string())?;
        Ok(self.clean)
    }

    fn current_branch(&self) -> Result<String> {
        self.record(GitOp::CurrentBranch, "rev-parse --abbrev-ref HEAD".to_string())?;
        self.state
            .borrow()
            .head
            .clone()
            .ok_or(BumpError::DetachedHead)
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        let call = format!("checkout -b {}", name);
        self.record(GitOp::CreateBranch, call.clone())?;
        {
            let mut state = self.state.borrow_mut();
            if !state.branches.insert(name.to_string()) {
                return Err(BumpError::git(
                    call,
                    format!("fatal: a branch named '{}' already exists\n", name),
                ));
            }
            state.head = Some(name.to_string());
        }

        if let Some(hook) = &self.after_create_branch {
            hook();
        }
        Ok(())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        let call = format!("checkout {}", name);
        self.record(GitOp::Checkout, call.clone())?;
        let mut state = self.state.borrow_mut();
        if !state.branches.contains(name) {
            return Err(BumpError::git(
                call,
                format!("error: pathspec '{}' did not match any file(s) known to git\n", name),
            ));
        }
        state.head = Some(name.to_string());
        Ok(())
    }

    fn stage(&self, path: &Path) -> Result<()> {
        self.record(GitOp::Stage, format!("add {}", path.display()))?;
        self.state.borrow_mut().staged.push(path.to_path_buf());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let call = format!("commit -m {}", message);
        self.record(GitOp::Commit, call.clone())?;
        let mut state = self.state.borrow_mut();
        if state.staged.is_empty() {
            return Err(BumpError::git(call, "nothing added to commit\n"));
        }
        let branch = state.head.clone().unwrap_or_else(|| "HEAD".to_string());
        state.commits.push((branch, message.to_string()));
        state.staged.clear();
        Ok(())
    }
}
