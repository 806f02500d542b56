//! Application configuration.
//!
//! Resolution order: `REKEY_API_URL` environment variable, then
//! `<config_dir>/rekey/config.json`, then the built-in default.

use std::path::PathBuf;

use serde::Deserialize;

/// Base URL used when nothing is configured.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Runtime configuration of the recovery client.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the account backend.
    #[serde(default = "default_api_url")]
    pub api_base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_url(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment and the config file.
    #[must_use]
    pub fn load() -> Self {
        if let Ok(url) = std::env::var("REKEY_API_URL") {
            if !url.trim().is_empty() {
                return Self { api_base_url: url };
            }
        }

        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::from_file(&path)
    }

    /// Returns the path to the config file, if the platform has one.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rekey").join("config.json"))
    }

    /// Reads configuration from a file, falling back to defaults when the
    /// file is missing or malformed (a broken config file should not keep
    /// the user from recovering their account).
    fn from_file(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "ignoring malformed config file");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(AppConfig::default().api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_parses_config_file_shape() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base_url": "https://api.example.com"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("absent.json"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }
}
