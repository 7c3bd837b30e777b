use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

use crate::services::activity::BucketOrder;
use crate::services::sales::StockPolicy;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";
const DEFAULT_RECENT_ITEM_DAYS: u32 = 7;

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Application environment
    #[validate(length(min = 1))]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Whether the point-of-sale cart may exceed a product's available stock
    #[serde(default)]
    pub stock_policy: StockPolicy,

    /// Ordering of activity entries inside a recency bucket
    #[serde(default)]
    pub activity_order: BucketOrder,

    /// Window (days) for counting catalog items as recently added
    #[serde(default = "default_recent_item_days")]
    #[validate(range(min = 1, max = 365))]
    pub recent_item_days: u32,

    /// Simulated latency of the stub login, in milliseconds
    #[serde(default)]
    #[validate(range(max = 10000))]
    pub auth_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV.to_string())
    }
}

impl AppConfig {
    pub fn new(environment: String) -> Self {
        Self {
            environment,
            log_level: default_log_level(),
            log_json: false,
            stock_policy: StockPolicy::default(),
            activity_order: BucketOrder::default(),
            recent_item_days: DEFAULT_RECENT_ITEM_DAYS,
            auth_delay_ms: 0,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case(DEFAULT_ENV)
    }

    /// Gets log level reference
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn auth_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.auth_delay_ms)
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_recent_item_days() -> u32 {
    DEFAULT_RECENT_ITEM_DAYS
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("invclothing={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let filter = EnvFilter::new(filter_directive);
    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

/// Same as [`load_config`] but reading profile files from `dir`.
pub fn load_config_from(dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    info!("Loading configuration for environment: {}", run_env);

    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let config = Config::builder()
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join(run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_profile(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(format!("{}.toml", name)), content).unwrap();
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.is_development());
        assert_eq!(cfg.stock_policy, StockPolicy::Unguarded);
        assert_eq!(cfg.activity_order, BucketOrder::Insertion);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut cfg = AppConfig::default();
        cfg.log_level = "verbose".into();
        let errors = cfg.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("log_level"));
    }

    #[test]
    fn rejects_zero_recent_window() {
        let mut cfg = AppConfig::default();
        cfg.recent_item_days = 0;
        let errors = cfg.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("recent_item_days"));
    }

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config_from(&dir.path().join("absent"), "staging").unwrap();
        assert_eq!(cfg.environment, "staging");
        assert_eq!(cfg.recent_item_days, DEFAULT_RECENT_ITEM_DAYS);
    }

    #[test]
    fn profile_overrides_default_file() {
        let dir = TempDir::new().unwrap();
        write_profile(
            &dir,
            "default",
            r#"
            log_level = "debug"
            stock_policy = "cap-at-stock"
            "#,
        );
        write_profile(
            &dir,
            "production",
            r#"
            log_json = true
            activity_order = "newest-first"
            "#,
        );

        let cfg = load_config_from(dir.path(), "production").unwrap();
        assert!(cfg.is_production());
        assert_eq!(cfg.log_level(), "debug");
        assert!(cfg.log_json);
        assert_eq!(cfg.stock_policy, StockPolicy::CapAtStock);
        assert_eq!(cfg.activity_order, BucketOrder::NewestFirst);
    }

    #[test]
    fn invalid_file_values_fail_validation() {
        let dir = TempDir::new().unwrap();
        write_profile(&dir, "default", "recent_item_days = 0\n");
        let result = load_config_from(dir.path(), "development");
        assert!(matches!(result, Err(AppConfigError::Validation(_))));
    }
}
