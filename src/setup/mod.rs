//! Environment prerequisites
//!
//! Checks that the tools the external test tool depends on are installed.
//! The check is advisory: findings are logged and the run continues
//! regardless.

pub mod registry;
pub mod verifier;

use crate::common::ProcessRunner;

pub use registry::{all_requirements, ToolRequirement};
pub use verifier::{parse_java_version, ProbeFailure};

/// A requirement that the current environment does not satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsatisfiedRequirement {
    pub requirement: &'static ToolRequirement,
    /// Executable that was checked
    pub program: String,
    pub failure: ProbeFailure,
}

/// Check every required tool and return the ones that are missing or too old
///
/// `runtime` is the executable that will launch the test tool; it stands in
/// for `java` in the presence and version checks. Never fails: each problem
/// is logged as it is found.
pub fn verify_environment(runner: &dyn ProcessRunner, runtime: &str) -> Vec<UnsatisfiedRequirement> {
    let mut unsatisfied = Vec::new();

    for requirement in all_requirements() {
        let program = requirement.program(runtime);
        if let Err(failure) = check_requirement(runner, requirement, program) {
            report(requirement, program, &failure);
            unsatisfied.push(UnsatisfiedRequirement {
                requirement,
                program: program.to_string(),
                failure,
            });
        }
    }

    if unsatisfied.is_empty() {
        tracing::debug!("All prerequisites satisfied");
    }

    unsatisfied
}

fn check_requirement(
    runner: &dyn ProcessRunner,
    requirement: &ToolRequirement,
    program: &str,
) -> Result<(), ProbeFailure> {
    let Some(path) = runner.locate(program) else {
        return Err(ProbeFailure::NotInstalled);
    };
    tracing::trace!(tool = program, path = %path.display(), "Found");

    if let Some(min_version) = requirement.min_version {
        let found = verifier::check_java_version(runner, program, min_version)?;
        tracing::debug!(tool = program, version = found, "Version ok");
    }

    Ok(())
}

fn report(requirement: &ToolRequirement, program: &str, failure: &ProbeFailure) {
    match failure {
        ProbeFailure::NotInstalled => {
            tracing::error!("{} (`{}`) is not installed", requirement, program);
        }
        ProbeFailure::VersionTooLow { found, required } => {
            tracing::error!(
                "{} is required, `{}` reports version {} (< {})",
                requirement,
                program,
                found,
                required
            );
        }
        ProbeFailure::UnexpectedFormat { output } => {
            tracing::warn!(
                "Unexpected output format for `{} -version`: {:?}",
                program,
                output
            );
        }
    }
}
