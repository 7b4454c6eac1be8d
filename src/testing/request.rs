//! Test run request and outcome types

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

use super::workloads::WorkloadProfile;
use crate::builder::BuildMode;

/// Minimum log level forwarded to ds_sandbox via `--log`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Spelling ds_sandbox expects on its command line
    pub fn as_arg(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Everything needed to launch one test run
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub workload: &'static WorkloadProfile,
    pub build_mode: BuildMode,
    /// Path to `maelstrom.jar`
    pub test_tool_path: PathBuf,
    pub log_level: LogLevel,
}

/// Result of a test run as reported by the test tool's exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub succeeded: bool,
    pub exit_code: i32,
}

impl RunOutcome {
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            succeeded: exit_code == 0,
            exit_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_forwarded_spelling() {
        assert_eq!(LogLevel::default().as_arg(), "Warn");
        assert_eq!(LogLevel::Trace.to_string(), "Trace");
    }

    #[test]
    fn test_outcome_from_exit_code() {
        assert!(RunOutcome::from_exit_code(0).succeeded);
        let failed = RunOutcome::from_exit_code(2);
        assert!(!failed.succeeded);
        assert_eq!(failed.exit_code, 2);
    }
}
