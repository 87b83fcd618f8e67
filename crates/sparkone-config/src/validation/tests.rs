//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = SparkoneConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_non_http_base_url() {
    let mut config = SparkoneConfig::default();
    config.endpoint.base_url = "192.168.1.176:5000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.base_url"));
}

#[test]
fn catches_relative_path() {
    let mut config = SparkoneConfig::default();
    config.endpoint.path = "v1/chat/completions".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.path"));
}

#[test]
fn catches_empty_instruction_template() {
    let mut config = SparkoneConfig::default();
    config.endpoint.instruction_template = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.instruction_template"));
}

#[test]
fn catches_zero_connect_timeout() {
    let mut config = SparkoneConfig::default();
    config.endpoint.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.connect_timeout_secs"));
}

#[test]
fn catches_oversized_request_timeout() {
    let mut config = SparkoneConfig::default();
    config.endpoint.request_timeout_secs = 3_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("endpoint.request_timeout_secs"));
}

#[test]
fn catches_probe_interval_too_short() {
    let mut config = SparkoneConfig::default();
    config.probe.interval_secs = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("probe.interval_secs"));
}

#[test]
fn catches_speech_args_without_command() {
    let mut config = SparkoneConfig::default();
    config.speech.args = vec!["-s".into(), "150".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("speech.args"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SparkoneConfig::default();
    config.probe.timeout_secs = 0;
    config.endpoint.read_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("probe.timeout_secs"));
    assert!(err.contains("endpoint.read_timeout_secs"));
    assert!(err.contains("; "));
}
