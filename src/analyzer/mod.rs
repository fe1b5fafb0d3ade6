//! Analysis engines
//!
//! This module provides:
//! - Range compatibility checking over a bounded probe cube
//! - Conflict analysis across dependency declarations
//! - Node version compatibility analysis
//! - Update advisory construction and safety classification

mod compat;
mod conflicts;
mod node_compat;
mod updates;

pub use compat::{CompatChecker, ProbeBounds};
pub use conflicts::find_conflicts;
pub use node_compat::analyze_node_compat;
pub use updates::{build_advisory, is_safe_update, VersionChangeKind};
