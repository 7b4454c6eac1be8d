//! CLI argument definitions
//!
//! Defines the clap arguments for the harness.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::builder::BuildMode;
use crate::testing::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(name = "ds-harness", about = "Build ds_sandbox and run a Maelstrom workload against it")]
#[command(version, long_about = None)]
#[command(group(ArgGroup::new("printing").args(["list", "dry_run"])))]
pub struct Cli {
    /// Workload to run (see --list)
    #[arg(required_unless_present = "list")]
    pub workload: Option<String>,

    /// Path to maelstrom.jar
    #[arg(short = 'j', long = "maelstrom", value_name = "JAR", required_unless_present = "list")]
    pub maelstrom: Option<PathBuf>,

    /// Compile mode when building
    #[arg(long, value_enum, default_value_t = BuildMode::Debug)]
    pub mode: BuildMode,

    /// Minimum logging level for ds_sandbox
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Warn)]
    pub log: LogLevel,

    /// Configuration file (default: platform config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List available workloads and exit
    #[arg(long, conflicts_with = "dry_run")]
    pub list: bool,

    /// Build and print the Maelstrom command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON (with --list or --dry-run)
    #[arg(long, requires = "printing")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ds-harness", "echo", "-j", "maelstrom.jar"]).unwrap();
        assert_eq!(cli.workload.as_deref(), Some("echo"));
        assert_eq!(cli.maelstrom, Some(PathBuf::from("maelstrom.jar")));
        assert_eq!(cli.mode, BuildMode::Debug);
        assert_eq!(cli.log, LogLevel::Warn);
        assert!(!cli.list);
    }

    #[test]
    fn test_mode_and_log_level() {
        let cli = Cli::try_parse_from([
            "ds-harness",
            "broadcast2",
            "--maelstrom",
            "m.jar",
            "--mode",
            "release",
            "--log",
            "Trace",
        ])
        .unwrap();
        assert_eq!(cli.mode, BuildMode::Release);
        assert_eq!(cli.log, LogLevel::Trace);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = Cli::try_parse_from(["ds-harness", "echo", "-j", "m.jar", "--mode", "fast"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_maelstrom_path_is_required() {
        assert!(Cli::try_parse_from(["ds-harness", "echo"]).is_err());
    }

    #[test]
    fn test_list_needs_no_workload() {
        let cli = Cli::try_parse_from(["ds-harness", "--list"]).unwrap();
        assert!(cli.list);
        assert!(cli.workload.is_none());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let parse = |level: &str| {
            Cli::try_parse_from(["ds-harness", "echo", "-j", "m.jar", "--log", level])
                .map(|cli| cli.log)
        };
        assert_eq!(parse("debug").unwrap(), LogLevel::Debug);
        assert_eq!(parse("OFF").unwrap(), LogLevel::Off);
        assert_eq!(parse("Warn").unwrap(), LogLevel::Warn);
        assert!(parse("verbose").is_err());
    }

    #[test]
    fn test_json_needs_list_or_dry_run() {
        let parse = |args: &[&str]| {
            let mut argv = vec!["ds-harness"];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv)
        };
        assert!(parse(&["echo", "-j", "m.jar", "--json"]).is_err());
        assert!(parse(&["--list", "--json"]).is_ok());
        assert!(parse(&["echo", "-j", "m.jar", "--dry-run", "--json"]).is_ok());
    }

    #[test]
    fn test_list_and_dry_run_conflict() {
        let result =
            Cli::try_parse_from(["ds-harness", "echo", "-j", "m.jar", "--list", "--dry-run"]);
        assert!(result.is_err());
    }
}
