// tests/integration_test.rs
//
// End-to-end release runs against real temporary git repositories.

mod support;

use std::fs;
use std::path::Path;

use bump::cli::{Compensation, Outcome, PipelineFailure, ReleaseOrchestrator, Stage};
use bump::domain::{BumpKind, ReleasePlan};
use bump::error::{BumpError, Result};
use bump::git::{GitPort, SystemGit};
use bump::ui::ScriptedWizard;
use chrono::{DateTime, TimeZone, Utc};

use support::TempRepo;

const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "version": "1.2.3",
  "private": true
}
"#;

const MIX_WITH_ATTRIBUTE: &str = r#"defmodule Demo.MixProject do
  use Mix.Project

  @version "0.9.7"

  def project do
    [app: :demo, version: @version]
  end
end
"#;

const MIX_WITH_KEYWORD: &str = r#"defmodule Demo.MixProject do
  use Mix.Project

  def project do
    [app: :demo, version: "2.5.1"]
  end
end
"#;

fn release<G: GitPort>(
    git: &G,
    repo: &TempRepo,
    wizard: &mut ScriptedWizard,
) -> std::result::Result<Outcome, PipelineFailure> {
    ReleaseOrchestrator::new(git, wizard, repo.path()).run()
}

fn released_plan(outcome: Outcome) -> ReleasePlan {
    match outcome {
        Outcome::Released { plan, .. } => plan,
        Outcome::Cancelled => panic!("expected a release, run was cancelled"),
    }
}

#[test]
fn test_node_patch_release() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    let original_commit = repo.rev("HEAD");
    let mut wizard = ScriptedWizard::choosing(BumpKind::Patch);

    let plan = released_plan(release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap());

    assert_eq!(plan.branch_name, "release/1.2.4");
    assert_eq!(repo.head_branch(), "release/1.2.4");
    assert_eq!(repo.read("package.json"), PACKAGE_JSON.replace("1.2.3", "1.2.4"));
    assert_eq!(repo.git(&["log", "-1", "--format=%s"]), "version bump 1.2.4");
    assert_eq!(repo.rev("HEAD~1"), original_commit);
    assert_eq!(
        repo.git(&["diff", "--name-only", "HEAD~1", "HEAD"]),
        "package.json"
    );
    assert_eq!(repo.status(), "");
    assert_eq!(repo.rev("main"), original_commit);
}

#[test]
fn test_elixir_major_release_via_attribute() {
    let repo = TempRepo::with_files(&[("mix.exs", MIX_WITH_ATTRIBUTE)]);
    let mut wizard = ScriptedWizard::choosing(BumpKind::Major);

    let plan = released_plan(release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap());

    assert_eq!(plan.current_version, "0.9.7");
    assert_eq!(plan.branch_name, "release/1.0.0");
    let written = repo.read("mix.exs");
    assert!(written.contains("@version \"1.0.0\""));
    assert!(written.contains("version: @version"));
}

#[test]
fn test_elixir_minor_release_via_keyword() {
    let repo = TempRepo::with_files(&[("mix.exs", MIX_WITH_KEYWORD)]);
    let mut wizard = ScriptedWizard::choosing(BumpKind::Minor);

    let plan = released_plan(release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap());

    assert_eq!(plan.new_version, "2.6.0");
    assert!(repo.read("mix.exs").contains("version: \"2.6.0\""));
}

fn april_seventh() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2031, 4, 7, 15, 4, 5).unwrap()
}

#[test]
fn test_date_based_release() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    let git = SystemGit::at(repo.path());
    let mut wizard = ScriptedWizard::choosing(BumpKind::Date);

    let outcome = ReleaseOrchestrator::new(&git, &mut wizard, repo.path())
        .with_clock(april_seventh)
        .run()
        .unwrap();
    let plan = released_plan(outcome);

    assert_eq!(plan.new_version, "2031.4.7-150405");
    assert_eq!(repo.head_branch(), "release/2031.4.7-150405");
    assert!(repo
        .read("package.json")
        .contains("\"version\": \"2031.4.7-150405\""));
}

#[test]
fn test_custom_branch_name_is_used() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    let mut wizard = ScriptedWizard::choosing(BumpKind::Minor).with_branch_name("  prep/1.3  ");

    release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap();

    assert_eq!(repo.head_branch(), "prep/1.3");
}

#[test]
fn test_dirty_tree_is_refused() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    fs::write(repo.path().join("package.json"), "{\"version\": \"9.9.9\"}").unwrap();
    let status_before = repo.status();
    let mut wizard = ScriptedWizard::choosing(BumpKind::Patch);

    let failure = release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap_err();

    assert!(matches!(failure.error, BumpError::DirtyWorkingTree));
    assert_eq!(repo.branches(), vec!["main".to_string()]);
    assert_eq!(repo.status(), status_before);
    assert_eq!(repo.read("package.json"), "{\"version\": \"9.9.9\"}");
}

#[test]
fn test_detached_head_is_refused() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    repo.git(&["checkout", "--quiet", "--detach"]);
    let mut wizard = ScriptedWizard::choosing(BumpKind::Patch);

    let failure = release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap_err();

    assert!(matches!(failure.error, BumpError::DetachedHead));
}

#[test]
fn test_existing_release_branch_fails_without_rollback() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    repo.git(&["branch", "release/1.2.4"]);
    let mut wizard = ScriptedWizard::choosing(BumpKind::Patch);

    let failure = release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap_err();

    assert_eq!(failure.stage, Stage::CreateBranch);
    match &failure.error {
        BumpError::GitInvocationFailed { output, .. } => assert!(output.contains("already exists")),
        other => panic!("expected GitInvocationFailed, got {:?}", other),
    }
    assert!(matches!(failure.compensation, Compensation::NotNeeded));
    assert_eq!(repo.head_branch(), "main");
    assert_eq!(repo.read("package.json"), PACKAGE_JSON);
}

#[test]
fn test_cancellation_leaves_repository_identical() {
    let repo = TempRepo::with_files(&[("package.json", PACKAGE_JSON)]);
    let head_before = repo.rev("HEAD");

    for mut wizard in [
        ScriptedWizard::cancelling(),
        ScriptedWizard::choosing(BumpKind::Major).cancelling_at_branch(),
    ] {
        let outcome = release(&SystemGit::at(repo.path()), &repo, &mut wizard).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(repo.read("package.json"), PACKAGE_JSON);
        assert_eq!(repo.status(), "");
        assert_eq!(repo.branches(), vec!["main".to_string()]);
        assert_eq!(repo.rev("HEAD"), head_before);
    }
}

/// Replaces the manifest with a directory as soon as the release branch exists.
struct SabotagingGit<'a> {
    inner: SystemGit,
    manifest: &'a Path,
}

impl GitPort for SabotagingGit<'_> {
    fn is_clean(&self) -> Result<bool> {
        self.inner.is_clean()
    }

    fn current_branch(&self) -> Result<String> {
        self.inner.current_branch()
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.inner.create_branch(name)?;
        fs::remove_file(self.manifest).unwrap();
        fs::create_dir(self.manifest).unwrap();
        Ok(())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.inner.checkout(name)
    }

    fn stage(&self, path: &Path) -> Result<()> {
        self.inner.stage(path)
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.inner.commit(message)
    }
}

#[test]
fn test_write_failure_returns_to_original_branch() {
    let repo = TempRepo::with_files(&[("mix.exs", MIX_WITH_KEYWORD)]);
    repo.git(&["checkout", "--quiet", "-b", "develop"]);
    let original_commit = repo.rev("HEAD");
    let manifest = repo.path().join("mix.exs");
    let git = SabotagingGit {
        inner: SystemGit::at(repo.path()),
        manifest: &manifest,
    };
    let mut wizard = ScriptedWizard::choosing(BumpKind::Minor);

    let failure = release(&git, &repo, &mut wizard).unwrap_err();

    assert_eq!(failure.stage, Stage::WriteManifest);
    assert!(matches!(failure.error, BumpError::FilesystemIO { .. }));
    assert!(matches!(failure.compensation, Compensation::Restored { .. }));
    assert_eq!(repo.head_branch(), "develop");
    assert!(repo.branches().contains(&"release/2.6.0".to_string()));
    assert_eq!(repo.rev("release/2.6.0"), original_commit);
}
