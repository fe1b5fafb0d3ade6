//! Nested dependency declaration discovery
//!
//! Walks one level of `node_modules`: for each top-level dependency, reads
//! `node_modules/{package}/package.json` and collects its declared
//! dependencies. Packages that are not installed or whose manifest cannot
//! be read are skipped, so the analysis degrades gracefully on partially
//! installed projects.

use crate::domain::Dependencies;
use serde::Deserialize;
use std::path::Path;

/// Minimal manifest shape for installed packages. Installed manifests can
/// miss name or version fields without blocking the analysis.
#[derive(Debug, Deserialize)]
struct InstalledManifest {
    #[serde(default)]
    dependencies: Dependencies,
}

/// Collects the dependency declarations of each installed top-level
/// dependency, in top-level declaration order.
pub fn resolve_nested_declarations(
    project_dir: &Path,
    top_level: &Dependencies,
) -> Vec<(String, Dependencies)> {
    let node_modules = project_dir.join("node_modules");
    let mut nested = Vec::new();

    for (package, _) in top_level.iter() {
        let manifest_path = node_modules.join(package).join("package.json");
        let Ok(content) = std::fs::read_to_string(&manifest_path) else {
            continue;
        };
        let Ok(manifest) = serde_json::from_str::<InstalledManifest>(&content) else {
            continue;
        };
        if !manifest.dependencies.is_empty() {
            nested.push((package.to_string(), manifest.dependencies));
        }
    }

    nested
}
