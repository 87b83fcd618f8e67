//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_sparkone_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, sparkone_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[endpoint]
base_url = "http://192.168.1.176:5000/"
request_timeout_secs = 15

[probe]
host = "74.137.26.51"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.base_url, "http://192.168.1.176:5000/");
    assert_eq!(config.endpoint.request_timeout_secs, 15);
    assert_eq!(config.probe.host, "74.137.26.51");
    // Defaults preserved
    assert_eq!(config.endpoint.path, "/v1/chat/completions");
    assert_eq!(config.probe.timeout_secs, 5);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, sparkone_common::ConfigError::ParseError(_)));
}

#[test]
fn load_does_not_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[probe]\ntimeout_secs = 1000\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.probe.timeout_secs, 1000);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sparkone").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.endpoint.mode, "instruct");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::SparkoneConfig;

    let config: SparkoneConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.endpoint.instruction_template, "Alpaca");
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("sparkone"));
        assert!(path_str.ends_with("config.toml"));
    }
}
