//! depscan - Node.js dependency compatibility analyzer library
//!
//! This library provides the core functionality for analyzing a Node.js
//! project's dependency health:
//! - Node version compatibility (engines.node)
//! - Version conflicts between dependency declarations
//! - Available upstream updates with safety classification
//! - Installation optimization suggestions

pub mod analyzer;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod node_env;
pub mod optimizer;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod version;
