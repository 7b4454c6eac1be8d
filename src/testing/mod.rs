//! Maelstrom test runs
//!
//! The workload registry, the per-run request type and the runner that
//! launches Maelstrom against the built ds_sandbox binary.

mod request;
mod runner;
pub mod workloads;

pub use request::{LogLevel, RunOutcome, RunRequest};
pub use runner::TestRunner;
pub use workloads::{lookup, WorkloadProfile};
