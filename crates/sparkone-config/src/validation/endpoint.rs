//! Validation for the completion endpoint section.

use crate::schema::SparkoneConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &SparkoneConfig) {
    let endpoint = &config.endpoint;

    let url = endpoint.base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "endpoint.base_url = {url:?} must start with http:// or https://"
        ));
    }
    if !endpoint.path.starts_with('/') {
        errors.push(format!(
            "endpoint.path = {:?} must start with '/'",
            endpoint.path
        ));
    }

    validate_non_empty(errors, "endpoint.mode", &endpoint.mode);
    validate_non_empty(
        errors,
        "endpoint.instruction_template",
        &endpoint.instruction_template,
    );

    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "endpoint.read_timeout_secs",
        endpoint.read_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        endpoint.request_timeout_secs,
        1,
        600,
    );
}
