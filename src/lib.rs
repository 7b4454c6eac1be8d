//! ds-harness - test orchestration for the ds_sandbox exercises
//!
//! Builds the ds_sandbox binary, picks a named workload and runs the
//! Maelstrom consistency checker against it, reporting pass/fail through
//! the exit status.

pub mod builder;
pub mod cli;
pub mod commands;
pub mod common;
pub mod setup;
pub mod testing;

// Re-export commonly used types for tests
pub use builder::{BuildMode, Builder};
pub use common::{Error, Result};
pub use testing::{LogLevel, RunOutcome, RunRequest, WorkloadProfile};
