// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "CAMPUSVIEW_API_BASE";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub api: ApiConfig,

    /// View behavior settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                self.api.base_url = base;
            }
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is not a URL: {e}")))?;
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.ui.carousel_interval_ms == 0 {
            return Err(AppError::validation("ui.carousel_interval_ms must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.ui.visibility_threshold) {
            return Err(AppError::validation(
                "ui.visibility_threshold must be in [0.0, 1.0]",
            ));
        }
        if self.ui.excerpt_graphemes == 0 {
            return Err(AppError::validation("ui.excerpt_graphemes must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for all content endpoints
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// View behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Carousel auto-advance interval in milliseconds
    #[serde(default = "defaults::carousel_interval")]
    pub carousel_interval_ms: u64,

    /// Fraction of a section that must be on screen to count as visible
    #[serde(default = "defaults::visibility_threshold")]
    pub visibility_threshold: f32,

    /// Maximum excerpt length in grapheme clusters
    #[serde(default = "defaults::excerpt_graphemes")]
    pub excerpt_graphemes: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: defaults::carousel_interval(),
            visibility_threshold: defaults::visibility_threshold(),
            excerpt_graphemes: defaults::excerpt_graphemes(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level for console output (debug, info, warn, error)
    #[serde(default = "defaults::log_level")]
    pub level: String,

    /// Show per-section progress lines
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            show_progress: defaults::show_progress(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `locale.<code>.toml` files
    #[serde(default = "defaults::locale_dir")]
    pub locale_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            locale_dir: defaults::locale_dir(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://localhost:8000/api".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; campusview/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // UI defaults
    pub fn carousel_interval() -> u64 {
        5000
    }
    pub fn visibility_threshold() -> f32 {
        0.3
    }
    pub fn excerpt_graphemes() -> usize {
        120
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
    pub fn show_progress() -> bool {
        true
    }

    // Path defaults
    pub fn locale_dir() -> String {
        "data".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_threshold_out_of_range() {
        let mut config = Config::default();
        config.ui.visibility_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\ncarousel_interval_ms = 3000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ui.carousel_interval_ms, 3000);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.ui.carousel_interval_ms, 5000);
    }
}
