//! Versioned JSON snapshot of a session for process-lifecycle persistence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Turn;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u64),
    #[error("malformed snapshot: {0}")]
    Malformed(String),
    #[error("invalid turn in snapshot: {0}")]
    InvalidTurn(String),
}

/// Conversation and input buffer. The in-flight flag is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub conversation: Vec<Turn>,
    pub input_buffer: String,
}

impl SessionSnapshot {
    pub fn new(conversation: Vec<Turn>, input_buffer: String) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            conversation,
            input_buffer,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Malformed(e.to_string()))
    }

    /// Parse and validate a snapshot. The version tag is checked before
    /// the rest of the document is interpreted.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| SnapshotError::Malformed(e.to_string()))?;

        let version = value
            .get("version")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| SnapshotError::Malformed("missing version".into()))?;
        if version != u64::from(SNAPSHOT_VERSION) {
            return Err(SnapshotError::UnsupportedVersion(version));
        }

        let snapshot: SessionSnapshot =
            serde_json::from_value(value).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Every turn needs a unique id and non-blank content.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(u64::from(self.version)));
        }
        let mut seen = HashSet::new();
        for (i, turn) in self.conversation.iter().enumerate() {
            if turn.id().is_empty() {
                return Err(SnapshotError::InvalidTurn(format!("turn {i} has no id")));
            }
            if !seen.insert(turn.id()) {
                return Err(SnapshotError::InvalidTurn(format!(
                    "duplicate turn id {}",
                    turn.id()
                )));
            }
            if turn.content().trim().is_empty() {
                return Err(SnapshotError::InvalidTurn(format!(
                    "turn {} has empty content",
                    turn.id()
                )));
            }
        }
        Ok(())
    }
}
