//! Building ds_sandbox
//!
//! Runs `cargo build` in the selected mode and resolves the conventional
//! output path `<target_dir>/<mode>/<binary_name>`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::common::config::BuildConfig;
use crate::common::{paths, Error, Invocation, ProcessRunner, Result};

/// Compile profile for the binary under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Release,
    #[default]
    Debug,
}

impl BuildMode {
    /// Directory segment cargo uses for this profile
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildMode::Release => "release",
            BuildMode::Debug => "debug",
        }
    }

    /// Extra build tool flags for this profile
    pub fn build_flags(&self) -> &'static [&'static str] {
        match self {
            BuildMode::Release => &["--release"],
            BuildMode::Debug => &[],
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for BuildMode {
    type Err = Error;

    /// Unknown modes are rejected, never coerced to a default
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "release" => Ok(BuildMode::Release),
            "debug" => Ok(BuildMode::Debug),
            other => Err(Error::UnknownBuildMode(other.to_string())),
        }
    }
}

/// Builds the binary under test
#[derive(Debug, Clone)]
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// The build command for a mode
    pub fn invocation(&self, mode: BuildMode) -> Invocation {
        Invocation::new(&self.config.program)
            .arg("build")
            .args(mode.build_flags().iter().copied())
    }

    /// Where the build leaves the binary for a mode
    pub fn binary_path(&self, mode: BuildMode) -> PathBuf {
        paths::artifact_path(
            &self.config.target_dir,
            mode.dir_name(),
            &self.config.binary_name,
        )
    }

    /// Build in `mode` and return the path of the built binary
    ///
    /// A non-zero exit from the build tool is terminal: no retry and no
    /// fallback to another mode.
    pub fn build(&self, runner: &dyn ProcessRunner, mode: BuildMode) -> Result<PathBuf> {
        tracing::info!("Building ds_sandbox in {} mode", mode);

        let code = runner.status(&self.invocation(mode))?;
        if code != 0 {
            return Err(Error::BuildFailed {
                mode: mode.to_string(),
                code,
            });
        }

        let path = self.binary_path(mode);
        tracing::debug!(path = %path.display(), "Build finished");
        Ok(path)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}
