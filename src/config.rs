use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealmate_recipe::CategoryWeights;
use mealmate_shared::{Filters, MealType, SelectionState, MAX_MISSING_CEILING};
use mealmate_shopping::Retailer;
use serde::Deserialize;
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub session: SessionConfig,
    /// Per-category scoring weights
    #[serde(default)]
    pub scoring: CategoryWeights,
    #[serde(default)]
    pub retailer: Retailer,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Starting point for a new session.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_pantry")]
    pub pantry: Vec<String>,
    #[serde(default = "default_max_missing")]
    pub max_missing: u8,
    /// 0 disables the time filter
    #[serde(default = "default_max_time_minutes")]
    pub max_time_minutes: u32,
    #[serde(default)]
    pub dietary_only: bool,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub limit_by_meal_type: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pantry: default_pantry(),
            max_missing: default_max_missing(),
            max_time_minutes: default_max_time_minutes(),
            dietary_only: false,
            meal_type: None,
            limit_by_meal_type: false,
        }
    }
}

fn default_pantry() -> Vec<String> {
    ["salt", "turmeric", "oil"].map(String::from).to_vec()
}

fn default_max_missing() -> u8 {
    2
}

fn default_max_time_minutes() -> u32 {
    60
}

impl SessionConfig {
    pub fn filters(&self) -> Filters {
        Filters {
            max_missing: Some(self.max_missing),
            max_time_minutes: self.max_time_minutes,
            dietary_only: self.dietary_only,
            meal_type: self.meal_type,
            limit_by_meal_type: self.limit_by_meal_type,
        }
        .clamped()
    }

    pub fn initial_state(&self) -> SelectionState {
        let mut state = SelectionState::with_pantry(self.pantry.iter().cloned());
        state.set_filters(self.filters());
        state
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in one
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALMATE__SESSION__MAX_MISSING, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.log_format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALMATE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("session.pantry")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Load, then reject a configuration that fails `validate`.
    pub fn load_validated(config_path: Option<String>) -> AppResult<Self> {
        let config = Self::load(config_path)?;
        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if !matches!(self.observability.log_format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.observability.log_format
            ));
        }
        if self.session.max_missing > MAX_MISSING_CEILING {
            return Err(format!(
                "Session max_missing must be at most {MAX_MISSING_CEILING}"
            ));
        }
        if self.retailer.host.trim().is_empty() {
            return Err("Retailer host must not be empty".to_string());
        }
        let path = &self.retailer.search_path;
        if path.is_empty() || !path.starts_with('/') || !path.ends_with('/') {
            return Err("Retailer search_path must start and end with '/'".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let mut config = Config::default();
        config.observability.log_format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_log_level() {
        let mut config = Config::default();
        config.observability.log_level = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_max_missing_above_ceiling() {
        let mut config = Config::default();
        config.session.max_missing = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_search_path_slashes() {
        let mut config = Config::default();
        config.retailer.search_path = "s/".to_string();
        assert!(config.validate().is_err());

        config.retailer.search_path = "/s".to_string();
        assert!(config.validate().is_err());

        config.retailer.search_path = "/".to_string();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validation_empty_host() {
        let mut config = Config::default();
        config.retailer.host = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_initial_state() {
        let session = SessionConfig {
            meal_type: Some(MealType::Lunch),
            limit_by_meal_type: true,
            ..SessionConfig::default()
        };
        let state = session.initial_state();

        assert!(state.have.is_empty());
        assert_eq!(state.pantry.len(), 3);
        assert!(state.pantry.contains("turmeric"));
        assert_eq!(state.filters.max_missing, Some(2));
        assert_eq!(state.filters.max_time_minutes, 60);
        assert!(state.filters.allows_meal_type(MealType::Lunch));
        assert!(!state.filters.allows_meal_type(MealType::Dinner));
    }
}
