//! Tool version verification
//!
//! Runs a tool's version-report command and checks the reported major
//! version against a requirement.

use std::fmt;

use crate::common::{Invocation, ProcessRunner};

/// Why a requirement is not satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// Not on PATH, or the version command could not be run
    NotInstalled,
    /// Installed, but older than required
    VersionTooLow { found: u32, required: u32 },
    /// The version command ran but its output did not contain a version
    UnexpectedFormat { output: String },
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::NotInstalled => write!(f, "not installed"),
            ProbeFailure::VersionTooLow { found, required } => {
                write!(f, "installed version {} < {}", found, required)
            }
            ProbeFailure::UnexpectedFormat { .. } => write!(f, "unexpected version output format"),
        }
    }
}

/// Extracts the major version from `java -version` output
///
/// Looks for the quoted `"major.minor..."` token after the word `version`
/// (`java version "11.0.2" 2019-01-15 LTS`, `openjdk version "17.0.8"`).
/// Legacy `1.x` versions report `x` as the major version.
pub fn parse_java_version(output: &str) -> Option<u32> {
    let line = output.lines().find(|l| l.contains("version \""))?;
    let start = line.find("version \"")? + "version \"".len();
    let rest = &line[start..];
    let quoted = &rest[..rest.find('"')?];

    let mut parts = quoted.split(|c: char| c == '.' || c == '_' || c == '-' || c == '+');
    let major: u32 = parts.next()?.parse().ok()?;
    if major == 1 {
        // 1.8.0_292 style
        return parts.next()?.parse().ok();
    }
    Some(major)
}

/// Checks a versioned requirement by running `<program> -version`
///
/// The JVM prints its version banner on stderr; stdout is used when stderr
/// is empty.
pub fn check_java_version(
    runner: &dyn ProcessRunner,
    program: &str,
    min_version: u32,
) -> Result<u32, ProbeFailure> {
    let output = match runner.output(&Invocation::new(program).arg("-version")) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(tool = program, error = %e, "Version probe failed");
            return Err(ProbeFailure::NotInstalled);
        }
    };
    if output.exit_code != 0 {
        tracing::debug!(tool = program, code = output.exit_code, "Version probe exited non-zero");
    }

    let text = if output.stderr.trim().is_empty() {
        &output.stdout
    } else {
        &output.stderr
    };

    match parse_java_version(text) {
        Some(found) if found >= min_version => Ok(found),
        Some(found) => Err(ProbeFailure::VersionTooLow {
            found,
            required: min_version,
        }),
        None => Err(ProbeFailure::UnexpectedFormat {
            output: text.trim().to_string(),
        }),
    }
}
