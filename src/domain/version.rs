use std::fmt;

use chrono::{DateTime, Utc};
use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{BumpError, Result};

/// User-facing versioning style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Semver,
    DateBased,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Semver, Scheme::DateBased];
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Semver => f.write_str("semver"),
            Scheme::DateBased => f.write_str("date-based"),
        }
    }
}

/// Concrete arithmetic applied to the current version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Date,
}

impl BumpKind {
    pub const SEMVER: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

    /// The scheme this bump belongs to
    pub fn scheme(&self) -> Scheme {
        match self {
            BumpKind::Date => Scheme::DateBased,
            _ => Scheme::Semver,
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "Major",
            BumpKind::Minor => "Minor",
            BumpKind::Patch => "Patch",
            BumpKind::Date => "Date",
        };
        f.write_str(name)
    }
}

/// Format used for date-based versions: `YYYY.M.D-HHMMSS`
const DATE_STAMP_FORMAT: &str = "%Y.%-m.%-d-%H%M%S";

/// Computes the next version, sampling the UTC wall clock for date bumps.
pub fn next_version(current: &str, bump: BumpKind) -> Result<String> {
    next_version_at(current, bump, Utc::now())
}

/// Computes the next version using `now` as the clock reading.
///
/// - **Date**: `current` is ignored, returns `now` as `YYYY.M.D-HHMMSS`
/// - **Major**: `(M+1).0.0`
/// - **Minor**: `M.(m+1).0`
/// - **Patch**: `M.m.(p+1)`
///
/// Semver bumps clear pre-release and build metadata. A `current` that is not
/// strict semver yields [`BumpError::UnparseableVersion`].
pub fn next_version_at(current: &str, bump: BumpKind, now: DateTime<Utc>) -> Result<String> {
    if bump == BumpKind::Date {
        return Ok(date_stamp(now));
    }

    let mut version =
        Version::parse(current).map_err(|e| BumpError::unparseable(current, e.to_string()))?;

    let overflow = || BumpError::unparseable(current, "version component overflow");
    match bump {
        BumpKind::Major => {
            version.major = version.major.checked_add(1).ok_or_else(overflow)?;
            version.minor = 0;
            version.patch = 0;
        }
        BumpKind::Minor => {
            version.minor = version.minor.checked_add(1).ok_or_else(overflow)?;
            version.patch = 0;
        }
        BumpKind::Patch => {
            version.patch = version.patch.checked_add(1).ok_or_else(overflow)?;
        }
        BumpKind::Date => unreachable!("date bumps return early"),
    }
    version.pre = Prerelease::EMPTY;
    version.build = BuildMetadata::EMPTY;

    Ok(version.to_string())
}

/// Renders a clock reading as a date-based version string
pub fn date_stamp(now: DateTime<Utc>) -> String {
    now.format(DATE_STAMP_FORMAT).to_string()
}

/// True when `current` is semver carrying pre-release or build metadata
/// that a semver bump would discard.
pub fn has_metadata(current: &str) -> bool {
    Version::parse(current)
        .map(|v| !v.pre.is_empty() || !v.build.is_empty())
        .unwrap_or(false)
}
