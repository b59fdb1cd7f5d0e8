//! Configuration management for the file manager
//!
//! Values are layered: built-in defaults, then an optional `filemgr.toml`
//! in the working directory, then `FILEMGR_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base name of the optional configuration file (`filemgr.toml`).
pub const CONFIG_FILE: &str = "filemgr";

/// Prefix for environment overrides, e.g. `FILEMGR_START_DIR`.
pub const ENV_PREFIX: &str = "FILEMGR";

pub const DEFAULT_END_MARKER: &str = "<END>";

/// Complete session configuration, loaded once at startup and passed to
/// every handler.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory used for empty path input and for resolving relative paths.
    /// Environment: FILEMGR_START_DIR
    pub start_dir: PathBuf,

    /// Sentinel line that ends interactive text entry.
    /// Environment: FILEMGR_END_MARKER
    pub end_marker: String,

    /// Clear the terminal between menu iterations.
    /// Environment: FILEMGR_CLEAR_SCREEN
    pub clear_screen: bool,

    /// Wait for Enter after each command before redrawing the menu.
    /// Environment: FILEMGR_PAUSE_AFTER_COMMAND
    pub pause_after_command: bool,
}

impl AppConfig {
    /// Load configuration from `filemgr.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file name (extension optional, file optional)
    pub fn load_from(file_name: &str) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::Message(format!("Cannot read working directory: {e}")))?;

        let settings = Config::builder()
            .set_default("start_dir", cwd.to_string_lossy().to_string())?
            .set_default("end_marker", DEFAULT_END_MARKER)?
            .set_default("clear_screen", true)?
            .set_default("pause_after_command", true)?
            .add_source(File::with_name(file_name).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()
    }

    /// Defaults rooted at `start_dir`, without consulting files or the environment.
    pub fn for_start_dir(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            clear_screen: true,
            pause_after_command: true,
        }
    }

    /// Get the start directory as a path
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Validation for all configuration values
    ///
    /// The start directory is canonicalized so every resolved path is absolute.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.end_marker.trim().is_empty() {
            return Err(ConfigError::Message("end_marker cannot be empty".into()));
        }

        if !self.start_dir.is_dir() {
            return Err(ConfigError::Message(format!(
                "start_dir is not an existing directory: {}",
                self.start_dir.display()
            )));
        }

        self.start_dir = self.start_dir.canonicalize().map_err(|e| {
            ConfigError::Message(format!(
                "Cannot resolve start_dir {}: {e}",
                self.start_dir.display()
            ))
        })?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_values_from_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.toml");
        fs::write(
            &file,
            format!(
                "start_dir = {:?}\nend_marker = \"EOF\"\nclear_screen = false\n",
                dir.path().to_string_lossy()
            ),
        )
        .unwrap();

        let config = AppConfig::load_from(file.to_str().unwrap()).unwrap();
        assert_eq!(config.start_dir, dir.path().canonicalize().unwrap());
        assert_eq!(config.end_marker, "EOF");
        assert!(!config.clear_screen);
        assert!(config.pause_after_command);
    }

    #[test]
    fn rejects_missing_start_dir() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::for_start_dir(dir.path().join("missing"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_end_marker() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::for_start_dir(dir.path());
        config.end_marker = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
