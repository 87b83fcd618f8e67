//! Reachability probe configuration.

use serde::{Deserialize, Serialize};

/// Liveness probe for the completion host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Host to probe. Empty means the host of `endpoint.base_url`.
    pub host: String,
    /// TCP port to probe. 0 means the port of `endpoint.base_url`.
    pub port: u16,
    /// Probe deadline in seconds (valid range: 1-60).
    pub timeout_secs: u32,
    /// Background probe interval in seconds (valid range: 5-3600).
    pub interval_secs: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 0,
            timeout_secs: 5,
            interval_secs: 30,
        }
    }
}
