//! Domain logic - pure release rules independent of git and the filesystem

pub mod branch;
pub mod plan;
pub mod project;
pub mod version;

pub use plan::{Intent, ReleasePlan};
pub use project::{ManifestLocation, ProjectKind};
pub use version::{BumpKind, Scheme};
