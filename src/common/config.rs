//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// How the binary under test is built
    #[serde(default)]
    pub build: BuildConfig,

    /// How the external test tool is launched
    #[serde(default)]
    pub test_tool: TestToolConfig,
}

/// Build settings
#[derive(Debug, Deserialize, Clone)]
pub struct BuildConfig {
    /// Build tool executable
    #[serde(default = "default_build_program")]
    pub program: String,

    /// Directory the build tool writes its artifacts into
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// File name of the built binary inside the mode directory
    #[serde(default = "default_binary_name")]
    pub binary_name: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_build_program(),
            target_dir: default_target_dir(),
            binary_name: default_binary_name(),
        }
    }
}

fn default_build_program() -> String {
    "cargo".to_string()
}
fn default_target_dir() -> PathBuf {
    PathBuf::from("target")
}
fn default_binary_name() -> String {
    "main".to_string()
}

/// External test tool settings
#[derive(Debug, Deserialize, Clone)]
pub struct TestToolConfig {
    /// Runtime used to launch the test tool archive
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Where the test tool writes its reports
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
}

impl Default for TestToolConfig {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            store_dir: default_store_dir(),
        }
    }
}

fn default_runtime() -> String {
    "java".to_string()
}
fn default_store_dir() -> PathBuf {
    PathBuf::from("store")
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.build.program, "cargo");
        assert_eq!(config.build.target_dir, PathBuf::from("target"));
        assert_eq!(config.build.binary_name, "main");
        assert_eq!(config.test_tool.runtime, "java");
        assert_eq!(config.test_tool.store_dir, PathBuf::from("store"));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::parse(
            r#"
            [build]
            binary_name = "ds_sandbox"
            "#,
        )
        .unwrap();
        assert_eq!(config.build.binary_name, "ds_sandbox");
        assert_eq!(config.build.program, "cargo");
        assert_eq!(config.test_tool.runtime, "java");
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let err = Config::parse("[build\nprogram = ").unwrap_err();
        assert!(matches!(err, super::super::Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, super::super::Error::FileRead { .. }));
    }
}
