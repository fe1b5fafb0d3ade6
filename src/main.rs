//! depscan - Node.js dependency compatibility analyzer CLI tool
//!
//! Analyzes a project's package.json for:
//! - Node version compatibility (engines.node)
//! - Version conflicts between declared and installed dependencies
//! - Available upstream updates with safety classification
//! - Installation optimization suggestions

use clap::Parser;
use depscan::cli::CliArgs;
use depscan::orchestrator::Orchestrator;
use depscan::output::OutputConfig;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depscan v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    let orchestrator = Orchestrator::new(args.clone())?;
    let report = orchestrator.run().await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let formatter = output_config.formatter();

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Conflicts or a Node incompatibility were found
        Ok(ExitCode::from(2))
    }
}
