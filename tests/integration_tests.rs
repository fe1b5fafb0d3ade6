//! Integration tests for depscan
//!
//! These tests verify:
//! - Manifest reading and dependency merging
//! - Conflict detection against an installed node_modules tree
//! - Report assembly and JSON stability

use depscan::analyzer::{find_conflicts, CompatChecker};
use depscan::domain::Dependencies;
use depscan::manifest::PackageJson;
use depscan::registry::resolve_nested_declarations;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write an installed package manifest under node_modules
fn install_package(dir: &Path, name: &str, content: &str) {
    let pkg_dir = dir.join("node_modules").join(name);
    fs::create_dir_all(&pkg_dir).unwrap();
    fs::write(pkg_dir.join("package.json"), content).unwrap();
}

mod manifest_reading {
    use super::*;

    #[test]
    fn test_read_full_manifest() {
        let temp_dir = create_test_dir();
        let package_json = r#"{
            "name": "test-project",
            "version": "1.0.0",
            "description": "fixture",
            "engines": { "node": ">=18" },
            "dependencies": {
                "lodash": "^4.17.21",
                "express": "^4.18.0"
            },
            "devDependencies": {
                "typescript": "~5.0.0"
            },
            "peerDependencies": {
                "react": "^18.0.0"
            }
        }"#;
        fs::write(temp_dir.path().join("package.json"), package_json).unwrap();

        let manifest = PackageJson::from_dir(temp_dir.path()).unwrap();
        assert_eq!(manifest.name, "test-project");
        assert_eq!(manifest.node_requirement(), Some(">=18"));

        let all = manifest.all_dependencies();
        assert_eq!(all.len(), 4);
        assert_eq!(all.get("lodash"), Some("^4.17.21"));
        assert_eq!(all.get("react"), Some("^18.0.0"));
    }

    #[test]
    fn test_section_precedence_across_sections() {
        let temp_dir = create_test_dir();
        let package_json = r#"{
            "name": "test-project",
            "version": "1.0.0",
            "dependencies": { "shared": "^2.0.0" },
            "devDependencies": { "shared": "^1.0.0" },
            "peerDependencies": { "shared": "^3.0.0" }
        }"#;
        fs::write(temp_dir.path().join("package.json"), package_json).unwrap();

        let manifest = PackageJson::from_dir(temp_dir.path()).unwrap();
        let all = manifest.all_dependencies();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get("shared"), Some("^2.0.0"));
    }
}

mod conflict_pipeline {
    use super::*;

    #[test]
    fn test_conflicts_against_installed_tree() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{
                "name": "test-project",
                "version": "1.0.0",
                "dependencies": {
                    "express": "^4.18.0",
                    "cookie": "^1.0.0",
                    "debug": "^4.3.0"
                }
            }"#,
        )
        .unwrap();

        // express pins an incompatible cookie, and a compatible debug
        install_package(
            temp_dir.path(),
            "express",
            r#"{"dependencies": {"cookie": "0.5.0", "debug": "^4.3.4"}}"#,
        );
        install_package(temp_dir.path(), "cookie", r#"{"name": "cookie"}"#);
        install_package(temp_dir.path(), "debug", r#"{"dependencies": {"ms": "^2.1.2"}}"#);

        let manifest = PackageJson::from_dir(temp_dir.path()).unwrap();
        let top_level = manifest.all_dependencies();
        let nested = resolve_nested_declarations(temp_dir.path(), &top_level);

        let checker = CompatChecker::new();
        let conflicts = find_conflicts(&checker, &top_level, &nested);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].package, "cookie");
        assert_eq!(conflicts[0].required_range, "^1.0.0");
        assert_eq!(conflicts[0].conflicting.len(), 1);
        assert_eq!(conflicts[0].conflicting[0].declarer, "express");
        assert_eq!(conflicts[0].conflicting[0].range, "0.5.0");
    }

    #[test]
    fn test_partially_installed_tree() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{
                "name": "test-project",
                "version": "1.0.0",
                "dependencies": { "missing-pkg": "^1.0.0" }
            }"#,
        )
        .unwrap();

        let manifest = PackageJson::from_dir(temp_dir.path()).unwrap();
        let top_level = manifest.all_dependencies();
        let nested = resolve_nested_declarations(temp_dir.path(), &top_level);

        assert!(nested.is_empty());
        let conflicts = find_conflicts(&CompatChecker::new(), &top_level, &nested);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_conflict_output_is_stable() {
        let checker = CompatChecker::new();
        let top_level = Dependencies::from([("a", "^1.0.0"), ("b", "^2.0.0")]);
        let nested = vec![
            (
                "dep1".to_string(),
                Dependencies::from([("a", "^2.0.0"), ("b", "^3.0.0")]),
            ),
            ("dep2".to_string(), Dependencies::from([("a", "^4.0.0")])),
        ];

        let first = serde_json::to_string(&find_conflicts(&checker, &top_level, &nested)).unwrap();
        let second = serde_json::to_string(&find_conflicts(&checker, &top_level, &nested)).unwrap();
        assert_eq!(first, second);

        let packages: Vec<String> = find_conflicts(&checker, &top_level, &nested)
            .iter()
            .map(|c| c.package.clone())
            .collect();
        assert_eq!(packages, vec!["a", "b"]);
    }
}

mod range_semantics {
    use super::*;

    #[test]
    fn test_npm_range_forms() {
        let checker = CompatChecker::new();

        // caret and tilde
        assert!(checker.ranges_compatible("^1.2.0", "~1.4.0"));
        assert!(!checker.ranges_compatible("^1.0.0", "^2.0.0"));

        // hyphen ranges
        assert!(checker.ranges_compatible("1.2.0 - 1.5.0", "^1.4.0"));

        // x-ranges
        assert!(checker.ranges_compatible("1.x", "~1.9.0"));
        assert!(!checker.ranges_compatible("1.x", "2.x"));

        // space-separated comparators
        assert!(checker.ranges_compatible(">=1.2.0 <2.0.0", "^1.5.0"));

        // OR alternatives
        assert!(checker.ranges_compatible("^1.0.0 || ^2.0.0", "^2.3.0"));

        // wildcard
        assert!(checker.ranges_compatible("*", "^17.3.1"));
    }

    #[test]
    fn test_malformed_range_is_never_compatible() {
        let checker = CompatChecker::new();
        assert!(!checker.ranges_compatible("garbage", "^1.0.0"));
        assert!(!checker.ranges_compatible("^1.0.0", "garbage"));
    }
}
