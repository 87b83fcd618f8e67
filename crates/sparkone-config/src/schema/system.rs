//! Session persistence and logging configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Session snapshot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Restore the previous conversation on start and save it on exit.
    pub persist: bool,
    /// Snapshot file. `None` means `<data dir>/sparkone/session.json`.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: true,
            snapshot_path: None,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "sparkone=debug",
            LogLevel::Info => "sparkone=info",
            LogLevel::Warning => "sparkone=warn",
            LogLevel::Error => "sparkone=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
