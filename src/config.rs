//! App Configuration
//!
//! Startup defaults embedded from `assets/config.toml`.

use serde::Deserialize;
use thiserror::Error;

use crate::i18n::Language;
use crate::theme::Theme;

const CONFIG_TOML: &str = include_str!("../assets/config.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub default_theme: Theme,
    pub default_language: Language,
    /// Visibility of the "task completed" notice
    pub notice_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            default_language: Language::En,
            notice_duration_ms: 2000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load the embedded config, falling back to defaults on error
    pub fn load() -> Self {
        match Self::parse(CONFIG_TOML) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::parse(CONFIG_TOML).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::parse("default_language = \"tr\"").unwrap();
        assert_eq!(config.default_language, Language::Tr);
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.notice_duration_ms, 2000);
    }

    #[test]
    fn test_dark_theme_override() {
        let config = AppConfig::parse("default_theme = \"dark\"").unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = AppConfig::parse("default_language = \"fr\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_tick_interval_not_configurable() {
        // The clock counts one second per tick, so the interval is fixed
        let err = AppConfig::parse("tick_interval_ms = 500").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
