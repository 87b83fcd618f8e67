//! Speech playback configuration.

use serde::{Deserialize, Serialize};

/// Text-to-speech playback of assistant replies.
///
/// Replies are spoken by running `command` with `args` followed by the
/// reply text as the final argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Empty means replies are only logged.
    pub command: String,
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: String::new(),
            args: Vec::new(),
        }
    }
}
