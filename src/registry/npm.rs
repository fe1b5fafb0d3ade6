//! npm registry adapter
//!
//! Fetches package metadata from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::HttpClient;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Per-version entry in the registry metadata. Only the deprecation
/// marker is relevant for the analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NpmVersionEntry {
    /// Deprecation message, present when the version is deprecated
    #[serde(default)]
    pub deprecated: Option<String>,
}

/// npm package metadata response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NpmPackageMetadata {
    /// Distribution tags ("latest", "next", ...)
    #[serde(default, rename = "dist-tags")]
    pub dist_tags: HashMap<String, String>,
    /// Published versions
    #[serde(default)]
    pub versions: HashMap<String, NpmVersionEntry>,
    /// Publish timestamps keyed by version
    #[serde(default)]
    pub time: HashMap<String, String>,
}

impl NpmPackageMetadata {
    /// The version the "latest" dist-tag points to
    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.get("latest").map(String::as_str)
    }

    /// The publish timestamp of a version, if recorded
    pub fn release_date(&self, version: &str) -> Option<DateTime<Utc>> {
        self.time
            .get(version)
            .and_then(|t| t.parse::<DateTime<Utc>>().ok())
    }
}

/// Source of npm package metadata. Lets the orchestrator run against a
/// canned store in tests.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch metadata for a package
    async fn fetch_metadata(&self, package: &str) -> Result<NpmPackageMetadata, RegistryError>;
}

/// npm registry adapter
pub struct NpmAdapter {
    client: HttpClient,
}

impl NpmAdapter {
    /// Create a new npm adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", NPM_REGISTRY_URL, package)
    }
}

#[async_trait]
impl MetadataSource for NpmAdapter {
    async fn fetch_metadata(&self, package: &str) -> Result<NpmPackageMetadata, RegistryError> {
        let url = self.build_url(package);
        self.client.get_json(&url, package).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = HttpClient::new().unwrap();
        let adapter = NpmAdapter::new(client);
        assert_eq!(
            adapter.build_url("lodash"),
            "https://registry.npmjs.org/lodash"
        );
    }

    #[test]
    fn test_build_url_scoped_package() {
        let client = HttpClient::new().unwrap();
        let adapter = NpmAdapter::new(client);
        assert_eq!(
            adapter.build_url("@types/node"),
            "https://registry.npmjs.org/@types/node"
        );
    }

    #[test]
    fn test_metadata_deserialization() {
        let json = r#"{
            "dist-tags": { "latest": "4.17.21" },
            "versions": {
                "4.17.20": {},
                "4.17.21": { "deprecated": "use 5.x" }
            },
            "time": {
                "4.17.21": "2021-02-20T15:42:16.891Z"
            }
        }"#;

        let metadata: NpmPackageMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.latest(), Some("4.17.21"));
        assert_eq!(
            metadata.versions["4.17.21"].deprecated.as_deref(),
            Some("use 5.x")
        );
        assert!(metadata.versions["4.17.20"].deprecated.is_none());
        assert!(metadata.release_date("4.17.21").is_some());
        assert!(metadata.release_date("4.17.20").is_none());
    }

    #[test]
    fn test_metadata_without_latest_tag() {
        let metadata: NpmPackageMetadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.latest().is_none());
    }
}
