//! Run orchestration
//!
//! Sequences the prerequisite check, the build, the workload lookup and the
//! Maelstrom run, and turns the result into a process exit status. The first
//! failing stage ends the run.

use colored::Colorize;

use crate::builder::Builder;
use crate::commands::Cli;
use crate::common::config::Config;
use crate::common::{Error, ProcessRunner, Result};
use crate::setup;
use crate::testing::{self, workloads, RunRequest, TestRunner};

/// Run the harness and return the process exit status
pub fn run(cli: Cli, runner: &dyn ProcessRunner) -> i32 {
    match execute(cli, runner) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            e.exit_code()
        }
    }
}

fn execute(cli: Cli, runner: &dyn ProcessRunner) -> Result<i32> {
    if cli.list {
        list_workloads(cli.json)?;
        return Ok(0);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Advisory only: a missing tool is reported, not enforced
    let unsatisfied = setup::verify_environment(runner, &config.test_tool.runtime);
    if !unsatisfied.is_empty() {
        tracing::warn!(
            "Continuing with {} unsatisfied prerequisite(s)",
            unsatisfied.len()
        );
    }

    let workload_id = cli
        .workload
        .ok_or_else(|| Error::Config("No workload given".to_string()))?;
    let test_tool_path = cli
        .maelstrom
        .ok_or_else(|| Error::Config("No path to maelstrom.jar given".to_string()))?;

    let binary_path = Builder::new(config.build).build(runner, cli.mode)?;

    let request = RunRequest {
        workload: testing::lookup(&workload_id)?,
        build_mode: cli.mode,
        test_tool_path,
        log_level: cli.log,
    };

    let test_runner = TestRunner::new(config.test_tool);

    if cli.dry_run {
        let invocation = test_runner.compose(&request, &binary_path);
        if cli.json {
            let mut argv = vec![invocation.program.clone()];
            argv.extend(invocation.args.iter().cloned());
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "workload": request.workload,
                    "mode": request.build_mode,
                    "binary": binary_path,
                    "command": argv,
                }))?
            );
        } else {
            println!("{}", invocation);
        }
        return Ok(0);
    }

    let outcome = test_runner.run(runner, &request, &binary_path)?;
    if !outcome.succeeded {
        tracing::error!(
            "Maelstrom test for workload {} failed (exit code {})",
            request.workload.id,
            outcome.exit_code
        );
    }
    Ok(outcome.exit_code)
}

fn list_workloads(json: bool) -> Result<()> {
    let all = workloads::all_workloads();

    if json {
        println!("{}", serde_json::to_string_pretty(all)?);
        return Ok(());
    }

    for workload in all {
        println!(
            "  {:12} {:12} {:10} {}",
            workload.id.bold(),
            workload.protocol_name,
            workload.sut_server_name.dimmed(),
            workload.protocol_args.join(" ")
        );
    }
    Ok(())
}
