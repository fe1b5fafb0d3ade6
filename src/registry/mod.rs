//! npm registry access and installed-tree inspection
//!
//! This module provides:
//! - A retrying HTTP client
//! - The npm registry metadata adapter
//! - Discovery of nested dependency declarations from node_modules

mod client;
mod nested;
mod npm;

pub use client::HttpClient;
pub use nested::resolve_nested_declarations;
pub use npm::{MetadataSource, NpmAdapter, NpmPackageMetadata, NpmVersionEntry};
