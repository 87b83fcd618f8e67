//! Token usage tracking across completions.

use crate::TokenUsage;

/// Tracks cumulative token usage for one session.
#[derive(Debug, Clone)]
pub struct TokenTracker {
    total: TokenUsage,
    /// Number of successful completions recorded.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            call_count: 0,
        }
    }

    /// Record token usage from a completion.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.prompt_tokens = self.total.prompt_tokens.saturating_add(usage.prompt_tokens);
        self.total.completion_tokens = self
            .total
            .completion_tokens
            .saturating_add(usage.completion_tokens);
        self.call_count += 1;
    }

    /// Get total token usage.
    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Get total tokens (prompt + completion).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Get number of completions recorded.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}
