//! Configuration management for ruku.
//!
//! Configuration is read from `~/.config/ruku/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod keybindings;

pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::i18n::Language;

pub const DEFAULT_BASE_URL: &str = "http://api.alquran.cloud/v1";
pub const DEFAULT_EDITION: &str = "quran-uthmani";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub quiz: QuizConfig,
    pub keybindings: KeybindingConfig,
}

/// Where passages are fetched from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub edition: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            edition: DEFAULT_EDITION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub language: Language,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.config/ruku/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("ruku").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }

    fn default_config_content() -> String {
        r##"# ruku configuration
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1", "+"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[api]
# Base URL of the alquran.cloud API
base_url = "http://api.alquran.cloud/v1"

# Text edition used for passages
edition = "quran-uthmani"

# Request timeout in seconds
timeout_secs = 10

[quiz]
# "english" or "arabic"
language = "english"

[keybindings]
finish = ["q", "Esc", "Ctrl+c"]
show_more = ["j", "Down"]
show_less = ["k", "Up"]
hint = ["h"]
add_mistake = ["+", "="]
subtract_mistake = ["-"]
next_question = ["n", "Enter"]
skip_question = ["s"]
copy_ayah = ["c"]
toggle_language = ["l"]
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.edition, "quran-uthmani");
        assert_eq!(config.quiz.language, Language::English);
        assert_eq!(config.keybindings.finish, vec!["q", "Esc", "Ctrl+c"]);
        assert_eq!(config.keybindings.copy_ayah, vec!["c"]);
        assert_eq!(config.keybindings.toggle_language, vec!["l"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[api]
edition = "quran-simple"

[quiz]
language = "arabic"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.api.edition, "quran-simple");
        assert_eq!(config.quiz.language, Language::Arabic);
        // Defaults fill the rest
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.keybindings.hint, vec!["h"]);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.quiz.language, Language::English);
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.api.edition, DEFAULT_EDITION);

        // Second load reads the file that was just written
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.keybindings.skip_question, vec!["s"]);
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = 1").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
