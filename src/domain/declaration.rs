//! Dependency declaration structures
//!
//! `Dependencies` is the mapping type used everywhere a package.json
//! dependency section appears. Report output must be byte-identical across
//! runs, and conflict records must list declarers in the order the input
//! declares them, so the mapping preserves insertion order instead of using
//! a hashed map.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single version-range declaration for a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    /// Package name
    pub package: String,
    /// Required version range, as written in the manifest
    pub range: String,
}

impl DependencyDeclaration {
    /// Creates a new declaration
    pub fn new(package: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            range: range.into(),
        }
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.package, self.range)
    }
}

/// An insertion-ordered mapping of package name to required version range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    entries: Vec<(String, String)>,
}

impl Dependencies {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a package. The first declaration of a package wins; later
    /// inserts for the same name are ignored (package.json merge semantics:
    /// dependencies take precedence over devDependencies over
    /// peerDependencies).
    pub fn insert(&mut self, package: impl Into<String>, range: impl Into<String>) {
        let package = package.into();
        if !self.contains(&package) {
            self.entries.push((package, range.into()));
        }
    }

    /// Looks up the range declared for a package
    pub fn get(&self, package: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == package)
            .map(|(_, range)| range.as_str())
    }

    /// Returns true if the package is declared
    pub fn contains(&self, package: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == package)
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, range)| (name.as_str(), range.as_str()))
    }

    /// Iterates entries as owned declarations in insertion order
    pub fn declarations(&self) -> impl Iterator<Item = DependencyDeclaration> + '_ {
        self.entries
            .iter()
            .map(|(name, range)| DependencyDeclaration::new(name.as_str(), range.as_str()))
    }

    /// Number of declared packages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no packages are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Dependencies {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut deps = Dependencies::new();
        for (package, range) in iter {
            deps.insert(package, range);
        }
        deps
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Dependencies {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(p, r)| (p.to_string(), r.to_string()))
            .collect()
    }
}

impl Serialize for Dependencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, range) in &self.entries {
            map.serialize_entry(name, range)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dependencies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DependenciesVisitor;

        impl<'de> Visitor<'de> for DependenciesVisitor {
            type Value = Dependencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of package name to version range")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut deps = Dependencies::new();
                while let Some((name, range)) = access.next_entry::<String, String>()? {
                    deps.insert(name, range);
                }
                Ok(deps)
            }
        }

        deserializer.deserialize_map(DependenciesVisitor)
    }
}
