//! Configuration management for Lectern.
//!
//! Configuration is read from `~/.config/lectern/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. Missing fields fall back to defaults; CLI flags override
//! config values.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::store::DuplicatePolicy;

pub const DEFAULT_FEED_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub store: StoreConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Endpoint serving the JSON array of posts.
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Policy when an ingested post id already exists.
    pub on_duplicate: DuplicatePolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default report author, used when `--author` is omitted.
    pub author: Option<String>,
    /// Rendered cover width in pixels.
    pub cover_width: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            author: None,
            cover_width: crate::report::DEFAULT_COVER_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. If the config file exists but is invalid, returns an
    /// error. Missing fields use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/lectern/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("lectern").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Lectern Configuration

[feed]
# Endpoint serving the JSON array of posts.
url = "https://jsonplaceholder.typicode.com/posts"

[store]
# Policy when an ingested post id already exists:
# - "reject": fail the batch on the first duplicate (default)
# - "skip": keep the stored row, drop the incoming one
# - "upsert": replace the stored row with the incoming one
on_duplicate = "reject"

[report]
# Default report author, used when --author is omitted.
# author = "Your Name"

# Rendered cover width in pixels.
cover_width = 384
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

        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.store.on_duplicate, DuplicatePolicy::Reject);
        assert_eq!(config.report.cover_width, 384);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[store]
on_duplicate = "skip"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert_eq!(config.store.on_duplicate, DuplicatePolicy::Skip);
        // Default values
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.report.author, None);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.store.on_duplicate, DuplicatePolicy::Reject);
    }
}
