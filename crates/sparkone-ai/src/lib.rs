//! Chat engine for SparkOne.
//!
//! Provides:
//! - The conversation data model (`Turn`, `Role`)
//! - A host reachability prober
//! - A completion client for OpenAI-style `/v1/chat/completions` endpoints
//! - The chat session manager that ties them together
//! - Token usage tracking

pub mod completion;
pub mod probe;
pub mod session;
pub mod token_tracker;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use completion::{CompletionConfig, CompletionRequest, HttpCompletionClient};
pub use probe::{endpoint_host_port, TcpProber};
pub use session::{
    FailureKind, PlaybackHook, Reachability, Session, SessionError, SessionSnapshot,
    SnapshotError, SubmitOutcome, CONNECTIVITY_ERROR_MESSAGE, SERVER_ERROR_MESSAGE,
    SNAPSHOT_VERSION, TIMEOUT_MESSAGE,
};
pub use token_tracker::TokenTracker;

/// Sends a conversation to a completion endpoint.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one completion request for the full conversation.
    ///
    /// Never fails: every outcome, including transport errors, is folded
    /// into a [`CompletionResult`]. No retries are performed.
    async fn send(&self, conversation: &[Turn]) -> CompletionResult;
}

/// Checks whether a remote host is reachable.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Any resolution or network error collapses to `false`.
    async fn is_reachable(&self, host: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    id: String,
    role: Role,
    content: String,
}

impl Turn {
    /// Create a turn with a freshly generated id.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: sparkone_common::new_id(),
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.content)
    }
}

/// Token counts reported by the endpoint for one completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }
}

/// Outcome of one completion request.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    Success { turn: Turn, usage: TokenUsage },
    /// Connect or read deadline exceeded; the server may have received the request.
    TimedOut,
    /// DNS failure, refused connection, or another transport-level error.
    ConnectivityFailure,
    /// Non-2xx status (carried when present), malformed body, or no choices.
    ServerError(Option<u16>),
}

impl CompletionResult {
    /// Successful result with no usage information.
    pub fn success(turn: Turn) -> Self {
        CompletionResult::Success {
            turn,
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("HTTP client error: {0}")]
    Client(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_get_distinct_ids() {
        let a = Turn::user("hello");
        let b = Turn::user("hello");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.content(), b.content());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(role, Role::System);
    }

    #[test]
    fn turn_display_is_role_prefixed() {
        let turn = Turn::assistant("hi there");
        assert_eq!(turn.to_string(), "assistant: hi there");
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            prompt_tokens: u64::MAX,
            completion_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }
}
