//! Maelstrom test runner
//!
//! Composes the Maelstrom command line and runs it in the foreground. The
//! exit code is the only result read back; Maelstrom writes its own report
//! under its store directory.

use std::path::Path;

use colored::Colorize;

use super::request::{RunOutcome, RunRequest};
use crate::common::config::TestToolConfig;
use crate::common::{Invocation, ProcessRunner, Result};

/// Launches the external test tool
#[derive(Debug, Clone)]
pub struct TestRunner {
    config: TestToolConfig,
}

impl TestRunner {
    pub fn new(config: TestToolConfig) -> Self {
        Self { config }
    }

    /// Compose the test tool command line
    ///
    /// Maelstrom requires this exact order: archive, workload, binary,
    /// workload parameters, then `--` followed by the arguments it passes
    /// to each node, ending with the server variant.
    pub fn compose(&self, request: &RunRequest, binary_path: &Path) -> Invocation {
        let workload = request.workload;

        Invocation::new(&self.config.runtime)
            .arg("-jar")
            .arg(request.test_tool_path.to_string_lossy())
            .args(["test", "-w", workload.protocol_name])
            .arg("--bin")
            .arg(binary_path.to_string_lossy())
            .args(workload.protocol_args.iter().copied())
            .arg("--")
            .args(["--log", request.log_level.as_arg()])
            .arg(workload.sut_server_name)
    }

    /// Run the workload against the built binary
    ///
    /// A failing test is a normal outcome, not an error. Only a failure to
    /// launch the test tool returns `Err`.
    pub fn run(
        &self,
        runner: &dyn ProcessRunner,
        request: &RunRequest,
        binary_path: &Path,
    ) -> Result<RunOutcome> {
        let invocation = self.compose(request, binary_path);
        tracing::info!(workload = request.workload.id, "Running maelstrom test");
        tracing::debug!(command = %invocation, "Maelstrom command");

        let outcome = RunOutcome::from_exit_code(runner.status(&invocation)?);

        if outcome.succeeded {
            println!(
                "{} {}",
                "✓".green(),
                format!("{} passed", request.workload.id).bold()
            );
        } else {
            println!(
                "{} {} (exit code {})",
                "✗".red(),
                format!("{} failed", request.workload.id).bold(),
                outcome.exit_code
            );
        }
        tracing::info!(
            "Maelstrom report written under {}",
            self.config.store_dir.join("latest").display()
        );

        Ok(outcome)
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new(TestToolConfig::default())
    }
}
