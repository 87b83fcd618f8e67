//! Completion client configuration.

use std::time::Duration;

/// Completion client configuration.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub base_url: String,
    pub path: String,
    pub mode: String,
    pub instruction_template: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub request_timeout: Duration,
}

impl CompletionConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: "/v1/chat/completions".to_string(),
            mode: "instruct".to_string(),
            instruction_template: "Alpaca".to_string(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_instruction_template(mut self, template: impl Into<String>) -> Self {
        self.instruction_template = template.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self.request_timeout = request;
        self
    }

    /// Full completion URL, joining base and path with exactly one slash.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}
