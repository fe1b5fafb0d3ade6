//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with package.json reading/parsing
//! - RegistryError: Issues with npm registry communication
//!
//! Range and version parse failures inside the analysis itself are not
//! errors: a malformed range degrades to "incompatible" and a malformed
//! version to "not safe", so the analyzers have no fatal paths.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// npm registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to package.json operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// package.json not found
    #[error("package.json not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read package.json
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Manifest is structurally invalid (missing name or version)
    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },
}

/// Errors related to npm registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in npm registry")]
    PackageNotFound { package: String },

    /// Network request failed
    #[error("failed to fetch package '{package}': {message}")]
    NetworkError { package: String, message: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded for npm registry")]
    RateLimitExceeded,

    /// Invalid response from registry
    #[error("invalid response for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// Timeout
    #[error("timeout while fetching '{package}'")]
    Timeout { package: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidManifest error
    pub fn invalid_manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
        }
    }
}
