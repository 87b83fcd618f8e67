//! Completion endpoint configuration.

use serde::{Deserialize, Serialize};

/// Remote chat-completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub path: String,
    /// Prompt mode forwarded verbatim in every request.
    pub mode: String,
    pub instruction_template: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Per-read timeout in seconds (valid range: 1-600).
    pub read_timeout_secs: u32,
    /// Whole-request deadline in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            path: "/v1/chat/completions".into(),
            mode: "instruct".into(),
            instruction_template: "Alpaca".into(),
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
            request_timeout_secs: 60,
        }
    }
}
