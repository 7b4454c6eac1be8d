//! Scripted process runner for tests
//!
//! Available under `#[cfg(test)]` and the `test-util` feature only.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use super::process::{Invocation, ProcessOutput, ProcessRunner};
use super::{Error, Result};

/// In-memory [`ProcessRunner`] that records every invocation
///
/// Programs answer with scripted exit codes and output instead of being
/// launched. Used to exercise the orchestration without a toolchain.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    installed: HashMap<String, PathBuf>,
    exit_codes: HashMap<String, i32>,
    outputs: HashMap<String, ProcessOutput>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a program as present on the search path
    pub fn with_installed(mut self, program: &str) -> Self {
        self.installed
            .insert(program.to_string(), PathBuf::from("/usr/bin").join(program));
        self
    }

    /// Exit code returned by `status` for a program (default 0)
    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    /// Output returned by `output` for a program
    pub fn with_output(mut self, program: &str, stdout: &str, stderr: &str) -> Self {
        self.outputs.insert(
            program.to_string(),
            ProcessOutput {
                exit_code: 0,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Every invocation seen so far, in order
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Invocations of a given program
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| inv.program == program)
            .cloned()
            .collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.installed.get(program).cloned()
    }

    fn status(&self, invocation: &Invocation) -> Result<i32> {
        self.calls.borrow_mut().push(invocation.clone());
        Ok(self
            .exit_codes
            .get(&invocation.program)
            .copied()
            .unwrap_or(0))
    }

    fn output(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        self.outputs.get(&invocation.program).cloned().ok_or_else(|| {
            Error::spawn(
                &invocation.program,
                std::io::Error::new(std::io::ErrorKind::NotFound, "not scripted"),
            )
        })
    }
}
