//! Tripplan configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Currency;

/// Main tripplan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pipeline execution settings
    pub pipeline: PipelineConfig,

    /// Price display settings
    pub currency: CurrencyConfig,

    /// Defaults applied when a chat message leaves fields out
    pub chat: ChatConfig,

    /// Log level (overridden by --log-level)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripplan.yml
        let local_config = PathBuf::from(".tripplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tripplan/tripplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripplan").join("tripplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Pipeline execution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Upper bound on one whole pipeline run in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Seed stage RNGs from the request so identical input gives identical output
    pub deterministic: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            deterministic: true,
        }
    }
}

/// Price display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Secondary display currency; native INR only when unset
    pub display: Option<Currency>,

    #[serde(rename = "inr-per-usd")]
    pub inr_per_usd: f64,

    #[serde(rename = "inr-per-eur")]
    pub inr_per_eur: f64,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            display: None,
            inr_per_usd: 83.0,
            inr_per_eur: 90.0,
        }
    }
}

impl CurrencyConfig {
    /// INR needed for one unit of `currency`
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Inr => 1.0,
            Currency::Usd => self.inr_per_usd,
            Currency::Eur => self.inr_per_eur,
        }
    }
}

/// Chat defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    #[serde(rename = "default-origin")]
    pub default_origin: String,

    #[serde(rename = "default-destination")]
    pub default_destination: String,

    /// Trip length when the message names none
    #[serde(rename = "default-trip-days")]
    pub default_trip_days: u32,

    /// Days from today to departure when the message names no date
    #[serde(rename = "lead-days")]
    pub lead_days: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_origin: "Delhi".to_string(),
            default_destination: "Goa".to_string(),
            default_trip_days: 3,
            lead_days: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pipeline.timeout_ms, 30_000);
        assert!(config.pipeline.deterministic);
        assert!(config.currency.display.is_none());
        assert_eq!(config.chat.default_origin, "Delhi");
        assert_eq!(config.chat.default_trip_days, 3);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
pipeline:
  timeout-ms: 5000
  deterministic: false
currency:
  display: USD
  inr-per-usd: 80.0
chat:
  default-origin: Chennai
log-level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.pipeline.timeout_ms, 5000);
        assert!(!config.pipeline.deterministic);
        assert_eq!(config.currency.display, Some(Currency::Usd));
        assert_eq!(config.currency.rate(Currency::Usd), 80.0);
        assert_eq!(config.currency.inr_per_eur, 90.0);
        assert_eq!(config.chat.default_origin, "Chennai");
        assert_eq!(config.chat.default_destination, "Goa");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("pipeline:\n  timeout-ms: 100\n").unwrap();
        assert_eq!(config.pipeline.timeout_ms, 100);
        assert!(config.pipeline.deterministic);
        assert_eq!(config.chat.lead_days, 7);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tripplan.yml");
        fs::write(&path, "currency:\n  display: EUR\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.currency.display, Some(Currency::Eur));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/tripplan.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
