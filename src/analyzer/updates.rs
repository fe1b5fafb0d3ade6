//! Update advisory construction and update safety classification
//!
//! Pure over registry metadata: fetching is done by the registry adapter,
//! the orchestrator feeds the responses in here.

use crate::domain::UpdateAdvisory;
use crate::registry::NpmPackageMetadata;
use crate::version::{parse_version, version_core};
use semver::Version;

/// Kind of change between two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeKind {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
}

impl VersionChangeKind {
    /// Classify the change between two versions
    pub fn between(current: &Version, candidate: &Version) -> Self {
        if candidate.major != current.major {
            VersionChangeKind::Major
        } else if candidate.minor != current.minor {
            VersionChangeKind::Minor
        } else {
            VersionChangeKind::Patch
        }
    }

    /// Plain display label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeKind::Major => "major",
            VersionChangeKind::Minor => "minor",
            VersionChangeKind::Patch => "patch",
        }
    }
}

/// Decides whether updating from `current` to `candidate` is safe, i.e.
/// at most the patch component changes. Returns false when either version
/// fails to parse.
pub fn is_safe_update(current: &str, candidate: &str) -> bool {
    match (parse_version(current), parse_version(candidate)) {
        (Some(current), Some(candidate)) => {
            current.major == candidate.major && current.minor == candidate.minor
        }
        _ => false,
    }
}

/// Builds an update advisory for one package from its registry metadata.
///
/// Returns `None` when the manifest entry carries no comparable version
/// (`*`, `latest`), the registry reported no usable latest version, or the
/// required version is already current.
pub fn build_advisory(
    package: &str,
    required_range: &str,
    metadata: &NpmPackageMetadata,
) -> Option<UpdateAdvisory> {
    let current = version_core(required_range)?;
    let latest = parse_version(metadata.latest()?)?;

    if latest <= current {
        return None;
    }

    let mut notes = Vec::new();
    match VersionChangeKind::between(&current, &latest) {
        VersionChangeKind::Major => notes.push(format!(
            "Major version change ({} -> {}): possible breaking changes",
            current.major, latest.major
        )),
        VersionChangeKind::Minor => {
            notes.push(format!("New features added in version {}", latest))
        }
        VersionChangeKind::Patch => {
            notes.push("Bug fixes and performance improvements".to_string())
        }
    }

    // Flag deprecated versions between the current and the latest
    let mut deprecated: Vec<(Version, &str)> = metadata
        .versions
        .iter()
        .filter_map(|(version_str, entry)| {
            let message = entry.deprecated.as_deref()?;
            let version = parse_version(version_str)?;
            (version > current && version <= latest).then_some((version, message))
        })
        .collect();
    deprecated.sort_by(|a, b| a.0.cmp(&b.0));
    for (version, message) in deprecated {
        notes.push(format!("Version {} is deprecated: {}", version, message));
    }

    Some(UpdateAdvisory {
        package: package.to_string(),
        current_version: current.to_string(),
        available_version: latest.to_string(),
        safe: is_safe_update(&current.to_string(), &latest.to_string()),
        released_at: metadata.release_date(&latest.to_string()),
        notes,
    })
}
