//! SparkOne configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults, so a partial (or empty) `config.toml` works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sparkone_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SparkoneConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use sparkone_common::ConfigError;

/// Environment variable overriding `endpoint.base_url`.
pub const BASE_URL_ENV: &str = "SPARKONE_BASE_URL";

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created with a commented template on first run.
/// `SPARKONE_BASE_URL` overrides the endpoint base URL, and the result is
/// validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<SparkoneConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut SparkoneConfig) {
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::info!("endpoint base URL overridden by {BASE_URL_ENV}");
            config.endpoint.base_url = url.to_string();
        }
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SparkoneConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
