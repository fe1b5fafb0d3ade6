//! Analysis orchestrator coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: read manifest → node compat → conflicts →
//!   updates → suggestions
//! - Parallel registry queries with rate limiting
//! - Error handling with partial continuation: registry failures are
//!   recorded in the report, only an unreadable manifest is fatal

use crate::analyzer::{analyze_node_compat, build_advisory, find_conflicts, CompatChecker};
use crate::cli::CliArgs;
use crate::domain::{AnalysisReport, Dependencies, UpdateAdvisory};
use crate::error::AppError;
use crate::manifest::PackageJson;
use crate::node_env::{FixedNodeRuntime, NodeRuntime, SystemNodeRuntime};
use crate::optimizer::suggest_optimizations;
use crate::progress::Progress;
use crate::registry::{resolve_nested_declarations, HttpClient, MetadataSource, NpmAdapter};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Default concurrency limit for registry requests
const DEFAULT_CONCURRENCY: usize = 10;

/// Orchestrator for coordinating the analysis workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Source of npm package metadata
    source: Arc<dyn MetadataSource>,
    /// Semaphore for registry concurrency control
    semaphore: Arc<Semaphore>,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        Ok(Self::with_source(args, Arc::new(NpmAdapter::new(client))))
    }

    /// Create an orchestrator with a custom metadata source (for testing)
    pub fn with_source(args: CliArgs, source: Arc<dyn MetadataSource>) -> Self {
        Self {
            args,
            source,
            semaphore: Arc::new(Semaphore::new(DEFAULT_CONCURRENCY)),
        }
    }

    /// Run the analysis workflow
    pub async fn run(&self) -> Result<AnalysisReport, AppError> {
        let show_progress = !self.args.quiet && !self.args.json;
        let mut progress = Progress::new(show_progress);
        let mut errors = Vec::new();

        let manifest = PackageJson::from_dir(&self.args.path)?;
        let checker = CompatChecker::new();

        let node_version = self.node_version();
        let node_compat = analyze_node_compat(
            &checker,
            manifest.node_requirement(),
            node_version.as_deref(),
        );

        let top_level = manifest.all_dependencies();

        progress.spinner("Reading installed dependencies...");
        let nested = resolve_nested_declarations(&self.args.path, &top_level);
        progress.finish_and_clear();

        let conflicts = find_conflicts(&checker, &top_level, &nested);

        let updates = if self.args.skip_updates {
            Vec::new()
        } else {
            self.fetch_updates(&top_level, &mut progress, &mut errors)
                .await
        };

        let suggestions = suggest_optimizations(&manifest);

        Ok(AnalysisReport {
            project: manifest.name.clone(),
            version: manifest.version.clone(),
            node_compat,
            conflicts,
            updates,
            suggestions,
            errors,
        })
    }

    /// The Node version to check against: an explicit CLI override wins,
    /// otherwise the installed runtime is probed
    fn node_version(&self) -> Option<String> {
        match &self.args.node_version {
            Some(version) => FixedNodeRuntime::new(version).version(),
            None => SystemNodeRuntime::new().version(),
        }
    }

    /// Fetch registry metadata for every top-level dependency and build
    /// update advisories. Queries run in parallel, results are collected
    /// in declaration order. Failures go into the errors list.
    async fn fetch_updates(
        &self,
        top_level: &Dependencies,
        progress: &mut Progress,
        errors: &mut Vec<String>,
    ) -> Vec<UpdateAdvisory> {
        progress.start(top_level.len() as u64, "Checking for updates");

        let mut handles = Vec::new();
        for declaration in top_level.declarations() {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&self.semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await;
                let result = source.fetch_metadata(&declaration.package).await;
                (declaration, result)
            }));
        }

        let mut updates = Vec::new();
        for handle in handles {
            let Ok((declaration, result)) = handle.await else {
                continue;
            };
            progress.inc();

            match result {
                Ok(metadata) => {
                    if let Some(advisory) =
                        build_advisory(&declaration.package, &declaration.range, &metadata)
                    {
                        updates.push(advisory);
                    }
                }
                // All registry failures are non-fatal
                Err(e) => {
                    errors.push(e.to_string());
                }
            }
        }

        progress.finish_and_clear();
        updates
    }
}
