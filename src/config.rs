//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::store::{CorruptSnapshot, MissingSnapshot, PersistenceMode, StoreOptions, DEFAULT_STORAGE_KEY};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Lead storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub persistence: PersistenceMode,

    #[serde(default)]
    pub missing_snapshot: MissingSnapshot,

    #[serde(default)]
    pub corrupt_snapshot: CorruptSnapshot,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("leadbook").to_string_lossy().to_string())
        .unwrap_or_else(|| "./leadbook_data".to_string())
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
            persistence: PersistenceMode::default(),
            missing_snapshot: MissingSnapshot::default(),
            corrupt_snapshot: CorruptSnapshot::default(),
        }
    }
}

impl StorageConfig {
    /// Store options derived from this section
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::new()
            .key(self.key.clone())
            .persistence(self.persistence)
            .missing_snapshot(self.missing_snapshot)
            .corrupt_snapshot(self.corrupt_snapshot)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("leadbook").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Storage overrides
        if let Some(data_dir) = var("LEADBOOK_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(key) = var("LEADBOOK_STORAGE_KEY") {
            self.storage.key = key;
        }
        if let Some(mode) = var("LEADBOOK_PERSISTENCE") {
            match mode.parse() {
                Ok(mode) => self.storage.persistence = mode,
                Err(e) => tracing::warn!("Ignoring LEADBOOK_PERSISTENCE: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("LEADBOOK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LEADBOOK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Leadbook Configuration
#
# Environment variables override these settings:
# - LEADBOOK_DATA_DIR
# - LEADBOOK_STORAGE_KEY
# - LEADBOOK_PERSISTENCE
# - LEADBOOK_LOG_LEVEL
# - LEADBOOK_LOG_FORMAT

[storage]
# Directory holding one file per storage key
data_dir = "~/.local/share/leadbook"

# Key of the serialized lead array
key = "leads"

# raw: store the collection as-is
# deduplicate: collapse exact duplicate records before saving
persistence = "raw"

# When no snapshot exists on load: keep (leave memory) or reset (clear memory)
missing_snapshot = "keep"

# When the snapshot cannot be parsed: fail (report an error) or reset (clear memory)
corrupt_snapshot = "fail"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.storage.key, "leads");
        assert_eq!(config.storage.persistence, PersistenceMode::Raw);
        assert_eq!(config.storage.missing_snapshot, MissingSnapshot::Keep);
        assert_eq!(config.storage.corrupt_snapshot, CorruptSnapshot::Fail);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [storage]
            persistence = "deduplicate"
            corrupt_snapshot = "reset"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.key, "leads");
        assert_eq!(config.storage.persistence, PersistenceMode::Deduplicate);
        assert_eq!(config.storage.corrupt_snapshot, CorruptSnapshot::Reset);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Config::parse("[storage]\npersistence = \"sometimes\"").is_err());
    }

    #[test]
    fn test_store_options_from_config() {
        let mut config = Config::default();
        config.storage.key = "crm".to_string();
        config.storage.missing_snapshot = MissingSnapshot::Reset;

        let options = config.storage.store_options();
        assert_eq!(options.key, "crm");
        assert_eq!(options.missing_snapshot, MissingSnapshot::Reset);
        assert_eq!(options.persistence, PersistenceMode::Raw);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LEADBOOK_DATA_DIR", "/tmp/leads"),
            ("LEADBOOK_STORAGE_KEY", "crm_leads"),
            ("LEADBOOK_PERSISTENCE", "dedup"),
            ("LEADBOOK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, "/tmp/leads");
        assert_eq!(config.storage.key, "crm_leads");
        assert_eq!(config.storage.persistence, PersistenceMode::Deduplicate);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_persistence_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| {
            (name == "LEADBOOK_PERSISTENCE").then(|| "sometimes".to_string())
        });
        assert_eq!(config.storage.persistence, PersistenceMode::Raw);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nkey = \"from_file\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.storage.key, "from_file");

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
