//! Installation optimization suggestions
//!
//! Static checks over the manifest:
//! - Packages declared in both dependencies and devDependencies
//! - Development tooling declared under dependencies
//! - Obsolete packages with maintained replacements
//! - General installation advice for large dependency trees

use crate::domain::{Suggestion, SuggestionKind};
use crate::manifest::PackageJson;

/// Well-known development tooling that belongs under devDependencies.
/// Matches the exact name, a "{name}-" prefix (plugins and presets), and
/// the "@types/" scope.
const COMMON_DEV_DEPENDENCIES: &[&str] = &[
    "eslint",
    "prettier",
    "typescript",
    "jest",
    "mocha",
    "chai",
    "babel",
    "webpack",
    "rollup",
    "gulp",
    "grunt",
    "karma",
    "jasmine",
    "nyc",
    "tslint",
];

/// Packages that are deprecated or unmaintained, with suggested replacements
const OBSOLETE_PACKAGES: &[(&str, &str)] = &[
    ("request", "axios or node-fetch"),
    ("left-pad", "String.prototype.padStart"),
    ("gulp", "npm scripts or modern bundlers"),
    ("bower", "npm or yarn"),
    ("tslint", "eslint with @typescript-eslint"),
    ("moment", "date-fns or dayjs"),
    ("underscore", "lodash or native array methods"),
    ("coffeescript", "modern JavaScript or TypeScript"),
];

/// Dependency count above which installation time advice is emitted
const LARGE_TREE_THRESHOLD: usize = 50;

/// Produces installation and manifest hygiene suggestions for a project.
pub fn suggest_optimizations(manifest: &PackageJson) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    find_duplicates(manifest, &mut suggestions);
    find_misplaced_dev_dependencies(manifest, &mut suggestions);
    find_obsolete_packages(manifest, &mut suggestions);
    general_advice(manifest, &mut suggestions);

    suggestions
}

fn find_duplicates(manifest: &PackageJson, out: &mut Vec<Suggestion>) {
    for (package, _) in manifest.dependencies.iter() {
        if manifest.dev_dependencies.contains(package) {
            out.push(Suggestion {
                kind: SuggestionKind::DuplicateDependency,
                message: format!(
                    "'{}' is declared in both dependencies and devDependencies; keep only one",
                    package
                ),
            });
        }
    }
}

fn is_dev_tool(package: &str) -> bool {
    if package.starts_with("@types/") {
        return true;
    }
    COMMON_DEV_DEPENDENCIES
        .iter()
        .any(|tool| package == *tool || package.starts_with(&format!("{}-", tool)))
}

fn find_misplaced_dev_dependencies(manifest: &PackageJson, out: &mut Vec<Suggestion>) {
    for (package, _) in manifest.dependencies.iter() {
        if is_dev_tool(package) {
            out.push(Suggestion {
                kind: SuggestionKind::MisplacedDevDependency,
                message: format!(
                    "'{}' looks like development tooling; move it to devDependencies",
                    package
                ),
            });
        }
    }
}

fn find_obsolete_packages(manifest: &PackageJson, out: &mut Vec<Suggestion>) {
    let all = manifest.all_dependencies();
    for (obsolete, replacement) in OBSOLETE_PACKAGES {
        if all.contains(obsolete) {
            out.push(Suggestion {
                kind: SuggestionKind::ObsoletePackage,
                message: format!(
                    "'{}' is obsolete or unmaintained; consider {}",
                    obsolete, replacement
                ),
            });
        }
    }
}

fn general_advice(manifest: &PackageJson, out: &mut Vec<Suggestion>) {
    let total = manifest.all_dependencies().len();
    if total > LARGE_TREE_THRESHOLD {
        out.push(Suggestion {
            kind: SuggestionKind::Installation,
            message: format!(
                "{} dependencies declared; consider pnpm for faster installs and less disk usage",
                total
            ),
        });
        out.push(Suggestion {
            kind: SuggestionKind::Installation,
            message: "Cache the package store in CI to speed up repeated installs".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dependencies;

    fn manifest_with(
        dependencies: Dependencies,
        dev_dependencies: Dependencies,
    ) -> PackageJson {
        PackageJson {
            name: "demo".to_string(),
            version: "1.0.0".to_string(),
            dependencies,
            dev_dependencies,
            ..Default::default()
        }
    }

    fn kinds(suggestions: &[Suggestion]) -> Vec<SuggestionKind> {
        suggestions.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_no_suggestions_for_clean_manifest() {
        let manifest = manifest_with(
            Dependencies::from([("express", "^4.18.0")]),
            Dependencies::from([("jest", "^29.0.0")]),
        );
        assert!(suggest_optimizations(&manifest).is_empty());
    }

    #[test]
    fn test_duplicate_dependency_detected() {
        let manifest = manifest_with(
            Dependencies::from([("lodash", "^4.17.21")]),
            Dependencies::from([("lodash", "^4.17.21")]),
        );
        let suggestions = suggest_optimizations(&manifest);
        assert!(kinds(&suggestions).contains(&SuggestionKind::DuplicateDependency));
        assert!(suggestions[0].message.contains("lodash"));
    }

    #[test]
    fn test_misplaced_dev_tool_exact_name() {
        let manifest = manifest_with(
            Dependencies::from([("eslint", "^8.0.0")]),
            Dependencies::new(),
        );
        let suggestions = suggest_optimizations(&manifest);
        assert_eq!(kinds(&suggestions), vec![SuggestionKind::MisplacedDevDependency]);
    }

    #[test]
    fn test_misplaced_dev_tool_plugin_prefix() {
        let manifest = manifest_with(
            Dependencies::from([("eslint-plugin-react", "^7.0.0")]),
            Dependencies::new(),
        );
        let suggestions = suggest_optimizations(&manifest);
        assert_eq!(kinds(&suggestions), vec![SuggestionKind::MisplacedDevDependency]);
    }

    #[test]
    fn test_misplaced_types_package() {
        let manifest = manifest_with(
            Dependencies::from([("@types/node", "^20.0.0")]),
            Dependencies::new(),
        );
        let suggestions = suggest_optimizations(&manifest);
        assert_eq!(kinds(&suggestions), vec![SuggestionKind::MisplacedDevDependency]);
    }

    #[test]
    fn test_prefix_requires_dash() {
        // "jest" matches but "jestlike" must not
        let manifest = manifest_with(
            Dependencies::from([("jestlike", "^1.0.0")]),
            Dependencies::new(),
        );
        assert!(suggest_optimizations(&manifest).is_empty());
    }

    #[test]
    fn test_obsolete_package_detected() {
        let manifest = manifest_with(
            Dependencies::from([("request", "^2.88.0"), ("moment", "^2.29.0")]),
            Dependencies::new(),
        );
        let suggestions = suggest_optimizations(&manifest);
        let obsolete: Vec<&Suggestion> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::ObsoletePackage)
            .collect();
        assert_eq!(obsolete.len(), 2);
        assert!(obsolete[0].message.contains("axios"));
        assert!(obsolete[1].message.contains("date-fns"));
    }

    #[test]
    fn test_obsolete_dev_dependency_detected() {
        let manifest = manifest_with(
            Dependencies::new(),
            Dependencies::from([("tslint", "^6.0.0")]),
        );
        let suggestions = suggest_optimizations(&manifest);
        assert!(kinds(&suggestions).contains(&SuggestionKind::ObsoletePackage));
    }

    #[test]
    fn test_large_tree_advice() {
        let mut dependencies = Dependencies::new();
        for i in 0..60 {
            dependencies.insert(format!("pkg-{}", i), "^1.0.0".to_string());
        }
        let manifest = manifest_with(dependencies, Dependencies::new());
        let suggestions = suggest_optimizations(&manifest);
        let installation: Vec<&Suggestion> = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Installation)
            .collect();
        assert_eq!(installation.len(), 2);
        assert!(installation[0].message.contains("60 dependencies"));
    }
}
