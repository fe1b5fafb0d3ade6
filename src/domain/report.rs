//! Aggregated analysis results
//!
//! One `AnalysisReport` is produced per run, combining the four analyses
//! (Node compatibility, dependency conflicts, available updates,
//! installation suggestions). Consumed by the output formatters.

use super::ConflictRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of comparing the installed Node version against `engines.node`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCompatReport {
    /// The range the project requires (`*` when engines.node is absent)
    pub required_range: String,
    /// The installed Node version, if one could be determined
    pub current_version: Option<String>,
    /// Whether the installed version satisfies the requirement
    pub compatible: bool,
    /// Upgrade advice when incompatible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// An available update for one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdvisory {
    /// Package name
    pub package: String,
    /// Version currently required by the manifest (range sigils stripped)
    pub current_version: String,
    /// Latest version published to the registry
    pub available_version: String,
    /// True when only the patch component differs
    pub safe: bool,
    /// When the latest version was published, if the registry reported it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_at: Option<DateTime<Utc>>,
    /// Human-readable notes: change kind, deprecations along the way
    pub notes: Vec<String>,
}

/// Category of an installation suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Same package in dependencies and devDependencies
    DuplicateDependency,
    /// Dev tooling declared under dependencies
    MisplacedDevDependency,
    /// Package known to be obsolete or unmaintained
    ObsoletePackage,
    /// General installation advice
    Installation,
}

/// A single installation optimization suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggestion category
    pub kind: SuggestionKind,
    /// Human-readable message
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion
    pub fn new(kind: SuggestionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Complete result of analyzing a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Project name from the manifest
    pub project: String,
    /// Project version from the manifest
    pub version: String,
    /// Node version compatibility
    pub node_compat: NodeCompatReport,
    /// Version conflicts between declared dependencies
    pub conflicts: Vec<ConflictRecord>,
    /// Available upstream updates
    pub updates: Vec<UpdateAdvisory>,
    /// Installation optimization suggestions
    pub suggestions: Vec<Suggestion>,
    /// Non-fatal errors encountered during analysis (registry failures etc.)
    pub errors: Vec<String>,
}

impl AnalysisReport {
    /// True when neither conflicts nor a Node incompatibility were found
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.node_compat.compatible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            project: "demo".to_string(),
            version: "1.0.0".to_string(),
            node_compat: NodeCompatReport {
                required_range: ">=18".to_string(),
                current_version: Some("20.11.0".to_string()),
                compatible: true,
                recommendation: None,
            },
            conflicts: Vec::new(),
            updates: Vec::new(),
            suggestions: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_clean_report() {
        assert!(sample_report().is_clean());
    }

    #[test]
    fn test_node_incompat_marks_dirty() {
        let mut report = sample_report();
        report.node_compat.compatible = false;
        assert!(!report.is_clean());
    }

    #[test]
    fn test_conflicts_mark_dirty() {
        let mut report = sample_report();
        report
            .conflicts
            .push(ConflictRecord::new("a", "^1.0.0", Vec::new()));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_suggestion_display() {
        let suggestion = Suggestion::new(SuggestionKind::Installation, "use pnpm");
        assert_eq!(format!("{}", suggestion), "use pnpm");
    }

    #[test]
    fn test_serde_suggestion_kind() {
        let json = serde_json::to_string(&SuggestionKind::MisplacedDevDependency).unwrap();
        assert_eq!(json, "\"misplaced_dev_dependency\"");
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_string(&sample_report()).unwrap();
        assert!(json.contains("\"project\":\"demo\""));
        assert!(json.contains("\"node_compat\""));
    }
}
