/// Prefix for release branches
pub const BRANCH_PREFIX: &str = "release/";

/// Branch name suggested to the user, e.g. `release/1.2.4`
pub fn default_branch_name(new_version: &str) -> String {
    format!("{}{}", BRANCH_PREFIX, new_version)
}

/// Resolves the wizard's answer into the branch to create.
///
/// Surrounding whitespace is trimmed and an empty answer falls back to the
/// default name for `new_version`.
pub fn resolve_branch_name(input: &str, new_version: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default_branch_name(new_version)
    } else {
        trimmed.to_string()
    }
}

/// Rejects answers git would never accept as a branch name.
///
/// Only catches the obvious cases; `git checkout -b` stays the authority.
pub fn check_branch_input(input: &str) -> Result<(), &'static str> {
    let trimmed = input.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err("Branch name cannot contain whitespace");
    }
    if trimmed.starts_with('-') {
        return Err("Branch name cannot start with '-'");
    }
    Ok(())
}
