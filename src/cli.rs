//! CLI argument parsing module for depscan

use clap::Parser;
use std::path::PathBuf;

/// Node.js dependency compatibility analyzer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depscan",
    version,
    about = "Node.js dependency compatibility analyzer"
)]
pub struct CliArgs {
    /// Project directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only conflicts and incompatibilities
    #[arg(short, long)]
    pub quiet: bool,

    // Analysis options
    /// Skip the registry update check (offline analysis)
    #[arg(long)]
    pub skip_updates: bool,

    /// Check engines.node against this version instead of the installed runtime
    #[arg(long, value_name = "VERSION")]
    pub node_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["depscan"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.skip_updates);
        assert!(args.node_version.is_none());
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["depscan", "/some/project"]);
        assert_eq!(args.path, PathBuf::from("/some/project"));
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from([
            "depscan",
            "--json",
            "--skip-updates",
            "--node-version",
            "v18.16.0",
        ]);
        assert!(args.json);
        assert!(args.skip_updates);
        assert_eq!(args.node_version.as_deref(), Some("v18.16.0"));
    }

    #[test]
    fn test_quiet_short_flag() {
        let args = CliArgs::parse_from(["depscan", "-q"]);
        assert!(args.quiet);
    }
}
