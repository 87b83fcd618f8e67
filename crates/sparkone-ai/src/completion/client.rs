//! Completion client struct, HTTP setup, and response parsing.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{AiError, CompletionResult, TokenUsage, Turn};

use super::config::CompletionConfig;

/// HTTP completion client. Builds one connection pool and reuses it.
pub struct HttpCompletionClient {
    pub(crate) config: CompletionConfig,
    pub(crate) url: String,
    pub(crate) http: reqwest::Client,
}

impl HttpCompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Client(e.to_string()))?;

        Ok(Self {
            url: config.url(),
            config,
            http,
        })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    object: String,
    #[serde(default)]
    created: i64,
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    index: u32,
    #[serde(default)]
    finish_reason: Option<String>,
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

/// Parse a 2xx response body into a completion result.
///
/// The first choice becomes a fresh `assistant` turn. Malformed JSON, an
/// empty choice list, or blank content is a `ServerError` without status.
pub(crate) fn parse_response(body: &[u8]) -> CompletionResult {
    let response: CompletionResponse = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            warn!("malformed completion response: {e}");
            return CompletionResult::ServerError(None);
        }
    };

    let Some(choice) = response.choices.first() else {
        warn!(id = %response.id, "completion response has no choices");
        return CompletionResult::ServerError(None);
    };

    if choice.message.content.trim().is_empty() {
        warn!(id = %response.id, "completion response has empty content");
        return CompletionResult::ServerError(None);
    }

    debug!(
        id = %response.id,
        object = %response.object,
        created = response.created,
        model = %response.model,
        index = choice.index,
        finish_reason = ?choice.finish_reason,
        "completion received"
    );

    let usage = response
        .usage
        .as_ref()
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    CompletionResult::Success {
        turn: Turn::assistant(choice.message.content.clone()),
        usage,
    }
}
