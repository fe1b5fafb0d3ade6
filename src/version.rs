//! npm version and range string handling
//!
//! The npm range grammar is a superset of what `semver::VersionReq` accepts.
//! This module normalizes npm-specific syntax before handing the expression
//! to the semver crate:
//! - x-ranges: `1.x`, `1.2.x`, `1.2.*`, `*`
//! - hyphen ranges: `1.0.0 - 2.0.0`
//! - space-separated comparators: `>=1.0.0 <2.0.0`
//! - OR alternatives: `^1.0.0 || ^2.0.0`

use regex::Regex;
use semver::{Version, VersionReq};
use std::sync::LazyLock;

static HYPHEN_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+){0,2}(?:-[\w.]+)?)\s+-\s+(\d+(?:\.\d+){0,2}(?:-[\w.]+)?)\s*$")
        .unwrap()
});

static COMPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(>=|<=|>|<|=|\^|~)\s+").unwrap());

static VERSION_CORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:[-+][\w.]+)?").unwrap());

/// A parsed npm version range.
///
/// `semver::VersionReq` has no OR operator, so an npm range is held as one
/// requirement per `||` alternative. A version matches the range if it
/// matches any alternative.
#[derive(Debug, Clone)]
pub struct Range {
    alternatives: Vec<VersionReq>,
    raw: String,
}

impl Range {
    /// Parse an npm range expression. Every `||` alternative must be valid
    /// for the range to be valid, as with npm's `validRange`; one malformed
    /// alternative rejects the whole expression. An empty expression (or
    /// alternative) means "any version".
    pub fn parse(expr: &str) -> Option<Self> {
        let alternatives: Option<Vec<VersionReq>> = expr
            .split("||")
            .map(|alt| {
                let alt = alt.trim();
                if alt.is_empty() {
                    Some(VersionReq::STAR)
                } else {
                    parse_alternative(alt)
                }
            })
            .collect();

        Some(Self {
            alternatives: alternatives?,
            raw: expr.to_string(),
        })
    }

    /// Check whether a version satisfies this range.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    /// The original range expression.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Parse a single (non-OR) npm range alternative into a `VersionReq`.
fn parse_alternative(alt: &str) -> Option<VersionReq> {
    // Hyphen range: "1.0.0 - 2.0.0" means ">=1.0.0, <=2.0.0"
    if let Some(caps) = HYPHEN_RANGE_RE.captures(alt) {
        let converted = format!(">={}, <={}", &caps[1], &caps[2]);
        return VersionReq::parse(&converted).ok();
    }

    // x-ranges and bare wildcards are understood by the semver crate
    // directly (`1.x`, `1.2.*`, `*`), as are caret/tilde/comparators.
    // npm additionally allows spaces both inside a comparator (">= 1.0.0")
    // and between comparators as AND (">=1.0.0 <2.0.0"); the semver crate
    // wants the former collapsed and the latter comma-separated.
    let collapsed = COMPARATOR_RE.replace_all(alt, "$1");
    let comma_separated = collapsed.split_whitespace().collect::<Vec<_>>().join(", ");

    VersionReq::parse(&comma_separated).ok()
}

/// Parse a version string as npm's `semver.clean` would: surrounding
/// whitespace and a leading `v` or `=` prefix are stripped. Range sigils
/// (`^`, `~`) are not version syntax and are rejected.
pub fn parse_version(input: &str) -> Option<Version> {
    let cleaned = input.trim().trim_start_matches(['v', '=']).trim();
    Version::parse(cleaned).ok()
}

/// Extract the bare version core from a manifest range entry, e.g.
/// `^4.17.21` -> `4.17.21`. Used to compare an installed constraint against
/// registry versions. Returns `None` when the entry carries no version
/// number at all (`*`, `latest`).
pub fn version_core(entry: &str) -> Option<Version> {
    let caps = VERSION_CORE_RE.captures(entry.trim())?;
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());
    Version::parse(&format!("{}.{}.{}", major, minor, patch)).ok()
}
