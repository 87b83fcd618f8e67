//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod endpoint;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::SparkoneConfig;
use sparkone_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SparkoneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    misc::validate_probe(&mut errors, config);
    misc::validate_speech(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
