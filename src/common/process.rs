//! External process invocation
//!
//! The build tool, the test tool and the version probe all go through
//! [`ProcessRunner`]. Every call blocks until the child exits; the harness
//! imposes no timeouts of its own.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use super::{Error, Result};

/// A fully composed external command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append arguments in order
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a process run with piped output
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external programs on behalf of the harness
pub trait ProcessRunner {
    /// Locate an executable on the search path
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run in the foreground with inherited stdio and return the exit code
    fn status(&self, invocation: &Invocation) -> Result<i32>;

    /// Run with captured stdout and stderr
    fn output(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

/// [`ProcessRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn status(&self, invocation: &Invocation) -> Result<i32> {
        tracing::debug!(command = %invocation, "Running");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::spawn(&invocation.program, e))?;

        Ok(exit_code(status))
    }

    fn output(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        tracing::trace!(command = %invocation, "Capturing output");

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::spawn(&invocation.program, e))?;

        Ok(ProcessOutput {
            exit_code: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// A child killed by a signal has no code; report it as a plain failure
fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => {
            tracing::warn!(%status, "Process terminated without an exit code");
            1
        }
    }
}
