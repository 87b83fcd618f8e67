//! Validation for the probe and speech sections.

use crate::schema::SparkoneConfig;

use super::helpers::validate_range;

/// Validate probe constraints.
pub(crate) fn validate_probe(errors: &mut Vec<String>, config: &SparkoneConfig) {
    validate_range(
        errors,
        "probe.timeout_secs",
        config.probe.timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "probe.interval_secs",
        config.probe.interval_secs,
        5,
        3600,
    );
}

/// Validate speech constraints.
pub(crate) fn validate_speech(errors: &mut Vec<String>, config: &SparkoneConfig) {
    if config.speech.command.trim().is_empty() && !config.speech.args.is_empty() {
        errors.push("speech.args is set but speech.command is empty".into());
    }
}
