//! Range compatibility checking via bounded probing
//!
//! Whether two npm ranges intersect is decided by enumerating every version
//! in a fixed probe cube (major < 20, minor < 20, patch < 5 by default,
//! 2000 candidates) and testing membership in both ranges. This is an
//! approximation, not a proof: ranges whose only common versions lie
//! outside the cube (major >= 20, or prerelease-only overlaps) are reported
//! as incompatible. False positives cannot occur since every probed
//! candidate is a real version.

use crate::version::Range;
use semver::Version;

/// Bounds of the probed version cube. Each component is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeBounds {
    /// Majors probed: `0..max_major`
    pub max_major: u64,
    /// Minors probed: `0..max_minor`
    pub max_minor: u64,
    /// Patches probed: `0..max_patch`
    pub max_patch: u64,
}

impl Default for ProbeBounds {
    fn default() -> Self {
        Self {
            max_major: 20,
            max_minor: 20,
            max_patch: 5,
        }
    }
}

impl ProbeBounds {
    /// Number of candidate versions in the cube
    pub fn candidate_count(&self) -> u64 {
        self.max_major * self.max_minor * self.max_patch
    }

    /// Iterate every version in the cube in ascending order
    fn versions(&self) -> impl Iterator<Item = Version> + '_ {
        (0..self.max_major).flat_map(move |major| {
            (0..self.max_minor).flat_map(move |minor| {
                (0..self.max_patch).map(move |patch| Version::new(major, minor, patch))
            })
        })
    }
}

/// Range compatibility checker over a bounded probe cube.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatChecker {
    bounds: ProbeBounds,
}

impl CompatChecker {
    /// Creates a checker with the default 20x20x5 cube
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker with custom probe bounds
    pub fn with_bounds(bounds: ProbeBounds) -> Self {
        Self { bounds }
    }

    /// The probe bounds in use
    pub fn bounds(&self) -> ProbeBounds {
        self.bounds
    }

    /// Decides whether two ranges have a nonempty intersection.
    ///
    /// Returns false when either range fails to parse: an unreadable
    /// constraint is treated as unsatisfiable rather than aborting the
    /// analysis.
    pub fn ranges_compatible(&self, range_a: &str, range_b: &str) -> bool {
        let (Some(a), Some(b)) = (Range::parse(range_a), Range::parse(range_b)) else {
            return false;
        };
        self.bounds
            .versions()
            .any(|v| a.matches(&v) && b.matches(&v))
    }

    /// Finds the highest probed version satisfying every range, if any.
    pub fn max_satisfying_all(&self, ranges: &[Range]) -> Option<Version> {
        // Ascending iteration, so the last hit is the maximum.
        self.bounds
            .versions()
            .filter(|v| ranges.iter().all(|r| r.matches(v)))
            .last()
    }

    /// Finds the lowest probed version satisfying a range, if any.
    pub fn min_satisfying(&self, range: &Range) -> Option<Version> {
        self.bounds.versions().find(|v| range.matches(v))
    }
}
