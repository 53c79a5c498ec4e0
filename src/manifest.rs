//! Project manifest detection and in-place version rewriting.
//!
//! The version string is located and replaced textually so that formatting,
//! comments, and field order in the manifest survive untouched. Only the first
//! occurrence is ever replaced.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::{ManifestLocation, ProjectKind};
use crate::error::{BumpError, Result};

/// Detects the project in the process working directory.
pub fn detect() -> Result<ManifestLocation> {
    let cwd = std::env::current_dir().map_err(|e| BumpError::io(Path::new("."), e))?;
    Ok(detect_in(&cwd))
}

/// Probes `dir` for `mix.exs`, then `package.json`.
///
/// Subdirectories are not searched. Returns an unknown location when neither
/// file exists.
pub fn detect_in(dir: &Path) -> ManifestLocation {
    for kind in ProjectKind::PROBE_ORDER {
        if let Some(file) = kind.manifest_file() {
            let candidate = dir.join(file);
            if candidate.is_file() {
                tracing::debug!(kind = %kind, path = %candidate.display(), "detected project");
                return ManifestLocation::new(kind, candidate);
            }
        }
    }

    tracing::debug!(dir = %dir.display(), "no manifest found");
    ManifestLocation::unknown()
}

/// Reads the current version string from the manifest.
pub fn read_version(location: &ManifestLocation) -> Result<String> {
    let content = read_manifest(location)?;
    find_version(location, &content)
}

/// Replaces the first `current` version line with `new`.
///
/// The manifest is re-read so the substitution is computed against its
/// content at write time.
pub fn write_version(location: &ManifestLocation, current: &str, new: &str) -> Result<()> {
    let content = read_manifest(location)?;
    let updated = substitute(location, &content, current, new)?;

    write_manifest(location.path(), &updated)?;
    tracing::debug!(path = %location.path().display(), from = current, to = new, "manifest rewritten");
    Ok(())
}

/// Applies the version substitution to `content` without touching disk.
pub fn substitute(
    location: &ManifestLocation,
    content: &str,
    current: &str,
    new: &str,
) -> Result<String> {
    let (old_line, new_line) = match location.kind() {
        ProjectKind::Elixir if content.contains("@version") => (
            format!("@version \"{}\"", current),
            format!("@version \"{}\"", new),
        ),
        ProjectKind::Elixir => (
            format!("version: \"{}\"", current),
            format!("version: \"{}\"", new),
        ),
        ProjectKind::Node => (
            format!("\"version\": \"{}\"", current),
            format!("\"version\": \"{}\"", new),
        ),
        ProjectKind::Unknown => return Err(BumpError::UnknownProjectKind),
    };

    let updated = content.replacen(&old_line, &new_line, 1);
    if updated == content {
        return Err(BumpError::SubstitutionMissed {
            path: location.path().to_path_buf(),
        });
    }
    Ok(updated)
}

fn find_version(location: &ManifestLocation, content: &str) -> Result<String> {
    let re = location
        .kind()
        .version_regex()
        .ok_or(BumpError::UnknownProjectKind)?;

    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| BumpError::PatternNotFound {
            path: location.path().to_path_buf(),
        })
}

fn read_manifest(location: &ManifestLocation) -> Result<String> {
    if location.kind() == ProjectKind::Unknown {
        return Err(BumpError::UnknownProjectKind);
    }

    let path = location.path();
    let bytes = fs::read(path).map_err(|e| BumpError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        BumpError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

fn write_manifest(path: &Path, content: &str) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(|e| BumpError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| BumpError::io(path, e))
}
