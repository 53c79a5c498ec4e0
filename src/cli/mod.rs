//! Workflow orchestration behind the `bump` binary

pub mod orchestration;

pub use orchestration::{Compensation, Outcome, PipelineFailure, ReleaseOrchestrator, Stage};
