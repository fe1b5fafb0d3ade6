//! Node version compatibility analysis
//!
//! Compares the installed Node version against the project's
//! `engines.node` requirement. When incompatible, recommends the minimum
//! satisfying version found in the probe cube, or falls back to a generic
//! message when the requirement has no witness there.

use super::CompatChecker;
use crate::domain::NodeCompatReport;
use crate::version::{parse_version, Range};

/// Analyzes Node version compatibility.
///
/// `required` is the `engines.node` entry (absent means any version is
/// acceptable). `current` is the installed Node version, if one was
/// detected; without one the requirement cannot be verified and the result
/// is reported as incompatible with advice to install a matching version.
pub fn analyze_node_compat(
    checker: &CompatChecker,
    required: Option<&str>,
    current: Option<&str>,
) -> NodeCompatReport {
    let Some(required) = required else {
        return NodeCompatReport {
            required_range: "*".to_string(),
            current_version: current.map(String::from),
            compatible: true,
            recommendation: None,
        };
    };

    let range = Range::parse(required);
    let version = current.and_then(parse_version);

    let compatible = match (&range, &version) {
        (Some(range), Some(version)) => range.matches(version),
        // Unreadable requirement or missing/unparseable Node version:
        // cannot verify, report as incompatible
        _ => false,
    };

    let recommendation = if compatible {
        None
    } else {
        let advice = match (&range, &version) {
            (Some(range), Some(version)) => match checker.min_satisfying(range) {
                Some(min) if *version < min => Some(format!(
                    "Upgrade Node.js to version {} or higher.",
                    min
                )),
                _ => None,
            },
            _ => None,
        };
        Some(advice.unwrap_or_else(|| {
            format!("Use a Node.js version satisfying the requirement: {}.", required)
        }))
    };

    NodeCompatReport {
        required_range: required.to_string(),
        current_version: current.map(String::from),
        compatible,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(required: Option<&str>, current: Option<&str>) -> NodeCompatReport {
        analyze_node_compat(&CompatChecker::new(), required, current)
    }

    #[test]
    fn test_no_requirement_is_compatible() {
        let report = analyze(None, Some("v18.16.0"));
        assert!(report.compatible);
        assert_eq!(report.required_range, "*");
        assert_eq!(report.current_version.as_deref(), Some("v18.16.0"));
        assert!(report.recommendation.is_none());
    }

    #[test]
    fn test_satisfied_requirement() {
        let report = analyze(Some(">=18"), Some("v18.16.0"));
        assert!(report.compatible);
        assert!(report.recommendation.is_none());
    }

    #[test]
    fn test_outdated_node_recommends_minimum() {
        let report = analyze(Some(">=18"), Some("v16.20.0"));
        assert!(!report.compatible);
        let rec = report.recommendation.unwrap();
        assert!(rec.contains("18.0.0"), "recommendation was: {}", rec);
    }

    #[test]
    fn test_too_new_node_gets_generic_advice() {
        let report = analyze(Some("^16.0.0"), Some("v18.16.0"));
        assert!(!report.compatible);
        let rec = report.recommendation.unwrap();
        assert!(rec.contains("^16.0.0"));
    }

    #[test]
    fn test_missing_node_version() {
        let report = analyze(Some(">=18"), None);
        assert!(!report.compatible);
        assert!(report.current_version.is_none());
        assert!(report.recommendation.is_some());
    }

    #[test]
    fn test_malformed_requirement() {
        let report = analyze(Some("not-a-range"), Some("v18.16.0"));
        assert!(!report.compatible);
        let rec = report.recommendation.unwrap();
        assert!(rec.contains("not-a-range"));
    }

    #[test]
    fn test_v_prefix_handled() {
        let report = analyze(Some("18.x"), Some("v18.2.1"));
        assert!(report.compatible);
    }
}
