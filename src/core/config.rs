use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "EUR".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root URL of the currency service, e.g. `http://localhost:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Source currency selected after the catalog loads.
    #[serde(default = "default_from")]
    pub default_from: String,
    /// Target currency selected after the catalog loads.
    #[serde(default = "default_to")]
    pub default_to: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_url: default_base_url(),
            default_from: default_from(),
            default_to: default_to(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or falls back to the
    /// built-in defaults when no config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxc", "fxc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
base_url: "http://rates.example.com"
default_from: "GBP"
default_to: "JPY"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.base_url, "http://rates.example.com");
        assert_eq!(config.default_from, "GBP");
        assert_eq!(config.default_to, "JPY");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("base_url: \"http://127.0.0.1:9000\"\n").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.default_from, "USD");
        assert_eq!(config.default_to, "EUR");

        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("nope.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
