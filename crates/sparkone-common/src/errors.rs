use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SparkoneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("speech error: {0}")]
    Speech(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("probe.timeout_secs = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: probe.timeout_secs = 0"
        );
    }

    #[test]
    fn sparkone_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SparkoneError = config_err.into();
        assert!(matches!(err, SparkoneError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn sparkone_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SparkoneError = io_err.into();
        assert!(matches!(err, SparkoneError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn sparkone_error_other_variants() {
        let err = SparkoneError::Network("refused".into());
        assert_eq!(err.to_string(), "network error: refused");

        let err = SparkoneError::Snapshot("unsupported version 9".into());
        assert_eq!(err.to_string(), "snapshot error: unsupported version 9");

        let err = SparkoneError::Speech("espeak not found".into());
        assert_eq!(err.to_string(), "speech error: espeak not found");
    }
}
