//! Pure formatting functions for UI output.
//!
//! Everything is written to stdout, errors included, prefixed so scripts can
//! still tell them apart.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::ReleasePlan;

/// Render an error line: `Error: <message>`
pub fn error_line(message: &str) -> String {
    format!("{} {}", style("Error:").red().bold(), message)
}

/// Render a warning line: `Warning: <warning>`
pub fn warning_line(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("Warning:").yellow().bold(), warning)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    println!("{}", error_line(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{}", warning_line(warning));
}

/// Display the proposed version change.
pub fn display_version_change(current: &str, new: &str) {
    println!("\n{}", style("Proposed Version Change:").bold());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(new).green());
}

/// Display the final summary after the release commit exists.
pub fn display_release_summary(plan: &ReleasePlan) {
    display_success(&format!(
        "Successfully created branch '{}', committed version bump. You are now on branch '{}'.",
        plan.branch_name, plan.branch_name
    ));
}

pub fn display_cancelled() {
    println!("Operation cancelled by user.");
}
