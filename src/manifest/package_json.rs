//! package.json reading and modeling
//!
//! Handles:
//! - dependencies
//! - devDependencies
//! - peerDependencies
//! - engines.node

use crate::domain::Dependencies;
use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine requirements from package.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engines {
    /// Required Node version range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Required npm version range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
}

/// Parsed package.json, limited to the fields the analysis needs.
/// Dependency sections keep their document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageJson {
    /// Package name
    #[serde(default)]
    pub name: String,
    /// Package version
    #[serde(default)]
    pub version: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Production dependencies
    #[serde(default)]
    pub dependencies: Dependencies,
    /// Development dependencies
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Dependencies,
    /// Peer dependencies
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: Dependencies,
    /// Engine requirements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<Engines>,
}

impl PackageJson {
    /// Parses package.json content. `path` is used for error context only.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let manifest: PackageJson = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        if manifest.name.is_empty() {
            return Err(ManifestError::invalid_manifest(path, "missing 'name' field"));
        }
        if manifest.version.is_empty() {
            return Err(ManifestError::invalid_manifest(
                path,
                "missing 'version' field",
            ));
        }

        Ok(manifest)
    }

    /// Reads and parses `package.json` from a project directory.
    pub fn from_dir(dir: &Path) -> Result<Self, ManifestError> {
        let path = dir.join("package.json");
        if !path.exists() {
            return Err(ManifestError::not_found(&path));
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ManifestError::read_error(&path, e))?;
        Self::parse(&content, &path)
    }

    /// All declared dependencies merged into one mapping. When a package
    /// appears in several sections, dependencies win over devDependencies,
    /// which win over peerDependencies.
    pub fn all_dependencies(&self) -> Dependencies {
        let mut all = Dependencies::new();
        for (name, range) in self.dependencies.iter() {
            all.insert(name, range);
        }
        for (name, range) in self.dev_dependencies.iter() {
            all.insert(name, range);
        }
        for (name, range) in self.peer_dependencies.iter() {
            all.insert(name, range);
        }
        all
    }

    /// The required Node version range, if declared
    pub fn node_requirement(&self) -> Option<&str> {
        self.engines.as_ref()?.node.as_deref()
    }
}
