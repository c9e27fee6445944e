use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::client::DEFAULT_BASE_URL;
use crate::model::UnitSystem;

/// City shown on first launch before the user has configured one.
pub const FALLBACK_CITY: &str = "Safi";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Safi"
/// default_units = "metric"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeatherMap API key. Required for any fetch; never compiled in.
    pub api_key: Option<String>,

    /// City used to seed the first search.
    pub default_city: Option<String>,

    /// Unit system used when none is passed on the command line.
    pub default_units: Option<UnitSystem>,

    /// API root override; tests point this at a local mock server.
    pub base_url: Option<String>,
}

impl Config {
    /// Return the configured API key, with a setup hint when missing.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `meteo configure` and enter your OpenWeatherMap API key."
            )
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// City for the initial search: configured default, or the built-in
    /// fallback.
    pub fn starting_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(FALLBACK_CITY)
    }

    pub fn starting_units(&self) -> UnitSystem {
        self.default_units.unwrap_or_default()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "meteo", "meteo")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_with_hint_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `meteo configure`"));
    }

    #[test]
    fn base_url_defaults_to_openweather() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);

        let cfg = Config {
            base_url: Some("http://127.0.0.1:8080".to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn starting_city_falls_back_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_city(), FALLBACK_CITY);

        let cfg = Config {
            default_city: Some("Rabat".to_string()),
            ..Config::default()
        };
        assert_eq!(cfg.starting_city(), "Rabat");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            api_key: Some("SECRET".to_string()),
            default_city: Some("Safi".to_string()),
            default_units: Some(UnitSystem::Imperial),
            base_url: None,
        };

        let serialized = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("SECRET"));
        assert_eq!(parsed.default_city.as_deref(), Some("Safi"));
        assert_eq!(parsed.default_units, Some(UnitSystem::Imperial));
    }

    #[test]
    fn missing_optional_fields_parse_as_none() {
        let parsed: Config = toml::from_str("api_key = \"K\"\n").unwrap();

        assert_eq!(parsed.api_key.as_deref(), Some("K"));
        assert!(parsed.default_city.is_none());
        assert!(parsed.default_units.is_none());
        assert!(parsed.base_url.is_none());
    }
}
