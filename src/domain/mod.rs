//! Core domain models for depscan
//!
//! This module contains the fundamental types used throughout the
//! application:
//! - Insertion-ordered dependency mappings
//! - Conflict records produced by the conflict analyzer
//! - The aggregated analysis report

mod conflict;
mod declaration;
mod report;

pub use conflict::{ConflictRecord, ConflictingDeclarer};
pub use declaration::{Dependencies, DependencyDeclaration};
pub use report::{AnalysisReport, NodeCompatReport, Suggestion, SuggestionKind, UpdateAdvisory};
