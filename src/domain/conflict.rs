//! Conflict records produced by the conflict analyzer

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A nested declarer whose range is incompatible with the top-level range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingDeclarer {
    /// Name of the package declaring the conflicting requirement
    pub declarer: String,
    /// The range that declarer requires
    pub range: String,
}

impl ConflictingDeclarer {
    /// Creates a new conflicting declarer entry
    pub fn new(declarer: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            declarer: declarer.into(),
            range: range.into(),
        }
    }
}

impl fmt::Display for ConflictingDeclarer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} requires {}", self.declarer, self.range)
    }
}

/// A version conflict found for one package.
///
/// Emitted only when at least one declarer's range is pairwise-incompatible
/// with the top-level range. `recommended_version` is the highest probed
/// version satisfying every involved range, when one exists; its absence
/// does not prove the ranges are unsatisfiable, only that no witness was
/// found inside the probe bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// The conflicted package
    pub package: String,
    /// The range required at the top level
    pub required_range: String,
    /// Declarers whose ranges conflict, in nested-declaration order
    pub conflicting: Vec<ConflictingDeclarer>,
    /// A version satisfying all involved ranges, if one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_version: Option<Version>,
}

impl ConflictRecord {
    /// Creates a conflict record with no recommendation
    pub fn new(
        package: impl Into<String>,
        required_range: impl Into<String>,
        conflicting: Vec<ConflictingDeclarer>,
    ) -> Self {
        Self {
            package: package.into(),
            required_range: required_range.into(),
            conflicting,
            recommended_version: None,
        }
    }

    /// Attaches a recommended version (builder pattern)
    pub fn with_recommendation(mut self, version: Version) -> Self {
        self.recommended_version = Some(version);
        self
    }

    /// Returns true if a satisfying version was found
    pub fn has_recommendation(&self) -> bool {
        self.recommended_version.is_some()
    }
}
