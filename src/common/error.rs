//! Error types for the harness
//!
//! Every fatal condition maps to a process exit status through
//! [`Error::exit_code`]. A failing test run is not an error: it is a
//! [`RunOutcome`](crate::testing::RunOutcome) with `succeeded == false`.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Operator Input Errors ===
    #[error("Unknown workload '{id}'. Available workloads: {known}")]
    UnknownWorkload { id: String, known: String },

    #[error("Build mode '{0}' must be either 'release' or 'debug'")]
    UnknownBuildMode(String),

    // === Build Errors ===
    #[error("Failed to build ds_sandbox in {mode} mode (exit code {code})")]
    BuildFailed { mode: String, code: i32 },

    // === Process Errors ===
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown workload error listing the known ids
    pub fn unknown_workload<S: AsRef<str>>(id: &str, known: &[S]) -> Self {
        Self::UnknownWorkload {
            id: id.to_string(),
            known: known.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", "),
        }
    }

    /// Create a spawn error for the given program
    pub fn spawn(program: &str, source: io::Error) -> Self {
        Self::Spawn {
            program: program.to_string(),
            source,
        }
    }

    /// Process exit status to report for this error
    ///
    /// Build failures propagate the build tool's own code; everything else
    /// exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BuildFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_failure_keeps_tool_exit_code() {
        let err = Error::BuildFailed {
            mode: "debug".to_string(),
            code: 101,
        };
        assert_eq!(err.exit_code(), 101);
    }

    #[test]
    fn test_unknown_workload_lists_known_ids() {
        let err = Error::unknown_workload("nope", &["echo", "broadcast1"]);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Unknown workload 'nope'. Available workloads: echo, broadcast1"
        );
    }
}
