//! Request body for the completion endpoint.

use serde::Serialize;

use crate::{AiError, Role, Turn};

/// One `{role, content}` entry of the request `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestMessage {
    pub role: Role,
    pub content: String,
}

/// Snapshot of the conversation at send time plus fixed formatting parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<RequestMessage>,
    pub mode: String,
    pub instruction_template: String,
}

impl CompletionRequest {
    /// Build a request from the full conversation, without truncation.
    ///
    /// The conversation must be non-empty and every turn must carry content.
    pub fn new(
        conversation: &[Turn],
        mode: impl Into<String>,
        instruction_template: impl Into<String>,
    ) -> Result<Self, AiError> {
        if conversation.is_empty() {
            return Err(AiError::InvalidRequest("empty conversation".into()));
        }
        if let Some(turn) = conversation.iter().find(|t| t.content().trim().is_empty()) {
            return Err(AiError::InvalidRequest(format!(
                "turn {} has empty content",
                turn.id()
            )));
        }

        Ok(Self {
            messages: conversation
                .iter()
                .map(|t| RequestMessage {
                    role: t.role(),
                    content: t.content().to_string(),
                })
                .collect(),
            mode: mode.into(),
            instruction_template: instruction_template.into(),
        })
    }
}
