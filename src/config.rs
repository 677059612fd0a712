//! Configuration file handling for qr-form.
//!
//! Loads configuration from `~/.config/qr-form/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for qr-form.
/// Loaded from ~/.config/qr-form/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { status_bar: true }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory PNG exports are written to (default: current directory).
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl ExportConfig {
    pub fn directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_true() -> bool {
    true
}

/// Default contents written by `qr-form config init`.
pub const DEFAULT_CONFIG: &str = r#"# qr-form configuration

[ui]
# Show the key hint bar at the bottom of the screen
status_bar = true

[export]
# Directory that Ctrl+S and `qr-form generate` write PNG files to
directory = "."
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse { path, source: e })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("qr-form").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/qr-form/config.toml")
        })
}
