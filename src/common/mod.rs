//! Common utilities shared by every harness stage

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod process;
#[cfg(any(test, feature = "test-util"))]
mod scripted;

pub use error::{Error, Result};
pub use process::{Invocation, ProcessOutput, ProcessRunner, SystemRunner};
#[cfg(any(test, feature = "test-util"))]
pub use scripted::ScriptedRunner;
