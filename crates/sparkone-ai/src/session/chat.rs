//! Async submission for Session: probe, complete, fold the result into history.

use sparkone_common::new_correlation_id;
use tracing::{debug, info, warn};

use crate::{CompletionResult, Turn};

use super::manager::Session;
use super::types::{
    BusyGuard, FailureKind, Reachability, SessionError, SubmitOutcome,
    CONNECTIVITY_ERROR_MESSAGE, SERVER_ERROR_MESSAGE, TIMEOUT_MESSAGE,
};

impl Session {
    /// Submit a user utterance and wait for the reply.
    ///
    /// The user turn is appended and the input buffer cleared before the
    /// first suspension point. Network failures are not errors: they end
    /// as a `system` turn in the conversation and a `Notice` outcome.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Err(SessionError::InvalidInput);
        }
        let guard = BusyGuard::acquire(&self.busy)?;

        let correlation = new_correlation_id();
        let conversation = {
            let mut state = self.state();
            state.conversation.push(Turn::user(prompt));
            state.input.clear();
            state.conversation.clone()
        };
        debug!(
            session = %self.id,
            %correlation,
            turns = conversation.len(),
            "submitting turn"
        );

        let reachable = self.prober.is_reachable(&self.host).await;
        self.state().reachability = Reachability::from(reachable);
        if !reachable {
            warn!(host = %self.host, %correlation, "completion host unreachable");
            return Ok(self.notice(FailureKind::Unreachable, CONNECTIVITY_ERROR_MESSAGE));
        }

        let outcome = match self.client.send(&conversation).await {
            CompletionResult::Success { turn, usage } => {
                {
                    let mut state = self.state();
                    state.tracker.record(&usage);
                    state.conversation.push(turn.clone());
                }
                info!(
                    %correlation,
                    chars = turn.content().len(),
                    tokens = usage.total_tokens(),
                    "reply received"
                );
                SubmitOutcome::Reply(turn)
            }
            CompletionResult::TimedOut => self.notice(FailureKind::TimedOut, TIMEOUT_MESSAGE),
            CompletionResult::ConnectivityFailure => {
                self.notice(FailureKind::ConnectivityFailure, CONNECTIVITY_ERROR_MESSAGE)
            }
            CompletionResult::ServerError(status) => {
                self.notice(FailureKind::ServerError(status), SERVER_ERROR_MESSAGE)
            }
        };
        drop(guard);

        if let (SubmitOutcome::Reply(turn), Some(hook)) = (&outcome, &self.playback) {
            hook(turn);
        }
        Ok(outcome)
    }

    /// Submit whatever is currently in the input buffer.
    pub async fn submit_input(&self) -> Result<SubmitOutcome, SessionError> {
        let text = self.input();
        self.submit(&text).await
    }

    fn notice(&self, kind: FailureKind, message: &str) -> SubmitOutcome {
        let turn = Turn::system(message);
        self.state().conversation.push(turn.clone());
        debug!(session = %self.id, ?kind, "appended system notice");
        SubmitOutcome::Notice { kind, turn }
    }
}
