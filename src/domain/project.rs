use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static ELIXIR_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:version:|@version)\s*"([^"]+)""#).unwrap());

static NODE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""version"\s*:\s*"([^"]+)""#).unwrap());

/// Kind of project detected from its manifest file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Unknown,
    Elixir,
    Node,
}

impl ProjectKind {
    /// Detection order used when probing a directory
    pub const PROBE_ORDER: [ProjectKind; 2] = [ProjectKind::Elixir, ProjectKind::Node];

    /// Manifest filename for this kind, if any
    pub fn manifest_file(&self) -> Option<&'static str> {
        match self {
            ProjectKind::Elixir => Some("mix.exs"),
            ProjectKind::Node => Some("package.json"),
            ProjectKind::Unknown => None,
        }
    }

    /// Regex locating the version string; capture group 1 is the version
    pub fn version_regex(&self) -> Option<&'static Regex> {
        match self {
            ProjectKind::Elixir => Some(&*ELIXIR_VERSION),
            ProjectKind::Node => Some(&*NODE_VERSION),
            ProjectKind::Unknown => None,
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectKind::Unknown => "unknown",
            ProjectKind::Elixir => "elixir",
            ProjectKind::Node => "node",
        };
        f.write_str(name)
    }
}

/// Detected project kind and the absolute path of its manifest.
///
/// The path is empty when the kind is [`ProjectKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocation {
    kind: ProjectKind,
    path: PathBuf,
}

impl ManifestLocation {
    pub fn new(kind: ProjectKind, path: impl Into<PathBuf>) -> Self {
        match kind {
            ProjectKind::Unknown => Self::unknown(),
            _ => ManifestLocation {
                kind,
                path: path.into(),
            },
        }
    }

    pub fn unknown() -> Self {
        ManifestLocation {
            kind: ProjectKind::Unknown,
            path: PathBuf::new(),
        }
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Short name used in progress output (e.g. "mix.exs")
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
