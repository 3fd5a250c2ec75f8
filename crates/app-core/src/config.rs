//! Application configuration
//!
//! Configuration is a small JSON document. Every field is optional on disk;
//! anything missing takes its default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Avatar shown when the signed-in user has none
pub const DEFAULT_PLACEHOLDER_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`AppConfig`]
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Product name shown on the loading and sign-in screens
    pub app_name: String,

    /// Version shown in the profile footer
    pub app_version: String,

    /// Avatar used when the user has none
    pub placeholder_avatar_url: String,

    /// Radius of the location filter on the search screen
    pub search_radius_miles: u32,

    /// Default tracing filter directive (overridden by `RUST_LOG`)
    pub log_filter: String,

    /// Initial state of the notifications toggle on the profile screen
    pub notifications_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Link Up".to_string(),
            app_version: "1.0.0".to_string(),
            placeholder_avatar_url: DEFAULT_PLACEHOLDER_AVATAR.to_string(),
            search_radius_miles: 5,
            log_filter: "info".to_string(),
            notifications_enabled: true,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded app config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::Invalid("appName must not be empty".to_string()));
        }
        if self.search_radius_miles == 0 {
            return Err(ConfigError::Invalid(
                "searchRadiusMiles must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Footer label on the profile screen (e.g., "Link Up v1.0.0")
    pub fn version_label(&self) -> String {
        format!("{} v{}", self.app_name, self.app_version)
    }

    /// Loading screen text (e.g., "Loading Link Up...")
    pub fn loading_label(&self) -> String {
        format!("Loading {}...", self.app_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version_label(), "Link Up v1.0.0");
        assert_eq!(config.loading_label(), "Loading Link Up...");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AppConfig::from_json(r#"{"searchRadiusMiles": 10}"#).unwrap();
        assert_eq!(config.search_radius_miles, 10);
        assert_eq!(config.app_name, "Link Up");
        assert!(config.notifications_enabled);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_json(r#"{"searchRadiusMiles": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_json(r#"{"appName": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = AppConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"appVersion": "2.1.0", "logFilter": "debug"}}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.version_label(), "Link Up v2.1.0");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
