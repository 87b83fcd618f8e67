//! CompletionClient trait implementation for HttpCompletionClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{CompletionClient, CompletionResult, Turn};

use super::client::{parse_response, HttpCompletionClient};
use super::request::CompletionRequest;

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn send(&self, conversation: &[Turn]) -> CompletionResult {
        let request = match CompletionRequest::new(
            conversation,
            &self.config.mode,
            &self.config.instruction_template,
        ) {
            Ok(r) => r,
            Err(e) => {
                warn!("completion request rejected locally: {e}");
                return CompletionResult::ServerError(None);
            }
        };

        debug!(url = %self.url, turns = request.messages.len(), "completion request");

        let response = match self.http.post(&self.url).json(&request).send().await {
            Ok(r) => r,
            Err(e) => return classify_transport_error(&e),
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            warn!("completion endpoint returned HTTP {status}: {text}");
            return CompletionResult::ServerError(Some(status.as_u16()));
        }

        match response.bytes().await {
            Ok(body) => parse_response(&body),
            Err(e) => classify_transport_error(&e),
        }
    }
}

/// Fold a reqwest failure into a result: deadlines are `TimedOut`,
/// everything else on the wire is a connectivity failure.
fn classify_transport_error(e: &reqwest::Error) -> CompletionResult {
    if e.is_timeout() {
        warn!("completion request timed out: {e}");
        CompletionResult::TimedOut
    } else {
        warn!(connect = e.is_connect(), "completion transport error: {e}");
        CompletionResult::ConnectivityFailure
    }
}
