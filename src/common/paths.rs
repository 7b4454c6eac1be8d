//! Configuration and output paths

use std::path::{Path, PathBuf};

/// Name used for the configuration directory
const APP_NAME: &str = "ds-harness";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/ds-harness/`
/// - macOS: `~/Library/Application Support/ds-harness/`
/// - Windows: `%APPDATA%\ds-harness\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Conventional location of a cargo build artifact: `<target_dir>/<mode>/<binary>`
pub fn artifact_path(target_dir: &Path, mode_dir: &str, binary_name: &str) -> PathBuf {
    target_dir.join(mode_dir).join(binary_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_toml() {
        if let Some(path) = config_path() {
            assert_eq!(path.file_name().unwrap(), "config.toml");
        }
    }

    #[test]
    fn test_artifact_path_layout() {
        let path = artifact_path(Path::new("target"), "release", "main");
        assert_eq!(path, PathBuf::from("target/release/main"));
    }
}
