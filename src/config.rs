//! Window settings for Keyboard Echo
//!
//! Settings are optional. When no file exists the built-in defaults are used,
//! which match the classic 640x480 demo window.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/keyboard-echo/config.toml` |
//! | macOS | `~/Library/Application Support/keyboard-echo/config.toml` |
//! | Windows | `%APPDATA%\keyboard-echo\config.toml` |
//!
//! ## Example
//!
//! ```toml
//! [window]
//! title = "Key events"
//! width = 800
//! height = 600
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Returns the path to the config file. The file may not exist.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("keyboard-echo").join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Inner width in logical pixels
    pub width: u32,
    /// Inner height in logical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "My Title".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!(
            "keyboard-echo-test-{}-{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.window.title, "My Title");
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
    }

    #[test]
    fn config_load_from_file() {
        let path = temp_config_path("load");
        fs::write(
            &path,
            "[window]\ntitle = \"Keys\"\nwidth = 800\nheight = 600\n",
        )
        .expect("Failed to write config");

        let loaded = Config::load_from(&path).expect("Failed to load config");
        assert_eq!(loaded.window.title, "Keys");
        assert_eq!(loaded.window.width, 800);
        assert_eq!(loaded.window.height, 600);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[window]\nwidth = 1024\n").expect("Failed to parse");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.window.title, "My Title");

        let empty: Config = toml::from_str("").expect("Failed to parse");
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn config_load_missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn config_malformed_file_is_parse_error() {
        let path = temp_config_path("malformed");
        fs::write(&path, "[window\nwidth = ").expect("Failed to write config");

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_serializes_to_toml() {
        let toml_str = toml::to_string_pretty(&Config::default()).expect("Failed to serialize");
        assert!(toml_str.contains("[window]"));
        assert!(toml_str.contains("width = 640"));
        assert!(toml_str.contains("title = \"My Title\""));
    }

    #[test]
    fn config_path_names_the_app() {
        if let Ok(path) = config_path() {
            assert!(path.to_string_lossy().contains("keyboard-echo"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "Could not determine config directory");

        let io_err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(io_err.to_string().contains("IO error"));
    }
}
