//! Session struct, state access, and snapshot/restore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sparkone_common::SessionId;
use tracing::info;

use crate::token_tracker::TokenTracker;
use crate::{CompletionClient, Prober, Turn};

use super::snapshot::SessionSnapshot;
use super::types::{BusyGuard, PlaybackHook, Reachability, SessionError};

/// Mutable part of a session. Only ever locked briefly, never across an await.
#[derive(Default)]
pub(super) struct SessionState {
    pub(super) conversation: Vec<Turn>,
    pub(super) input: String,
    pub(super) reachability: Reachability,
    pub(super) tracker: TokenTracker,
}

/// A chat session: conversation history, input buffer and single-flight
/// send orchestration against one completion host.
pub struct Session {
    pub(super) id: SessionId,
    /// Host probed before every send.
    pub(super) host: String,
    pub(super) prober: Arc<dyn Prober>,
    pub(super) client: Arc<dyn CompletionClient>,
    pub(super) playback: Option<PlaybackHook>,
    pub(super) state: Mutex<SessionState>,
    /// Whether a send is in flight.
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new(
        host: impl Into<String>,
        prober: Arc<dyn Prober>,
        client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            host: host.into(),
            prober,
            client,
            playback: None,
            state: Mutex::new(SessionState::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Notify `hook` of every assistant turn received.
    pub fn with_playback(mut self, hook: PlaybackHook) -> Self {
        self.playback = Some(hook);
        self
    }

    pub(super) fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Copy of the full conversation, in insertion order.
    pub fn conversation(&self) -> Vec<Turn> {
        self.state().conversation.clone()
    }

    /// Number of turns in the conversation.
    pub fn turn_count(&self) -> usize {
        self.state().conversation.len()
    }

    /// Replace the input buffer, e.g. with recognized speech.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state().input = text.into();
    }

    pub fn input(&self) -> String {
        self.state().input.clone()
    }

    /// Whether a send is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Outcome of the most recent probe made by this session.
    pub fn reachability(&self) -> Reachability {
        self.state().reachability
    }

    /// Cumulative token usage of this session.
    pub fn tracker(&self) -> TokenTracker {
        self.state().tracker.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state();
        SessionSnapshot::new(state.conversation.clone(), state.input.clone())
    }

    /// Replace conversation and input buffer from a snapshot.
    ///
    /// Fails with `Busy` while a send is in flight; afterwards the session
    /// is always idle.
    pub fn restore(&self, snapshot: SessionSnapshot) -> Result<(), SessionError> {
        snapshot.validate()?;
        let _guard = BusyGuard::acquire(&self.busy)?;

        let mut state = self.state();
        info!(
            session = %self.id,
            turns = snapshot.conversation.len(),
            "restoring session snapshot"
        );
        state.conversation = snapshot.conversation;
        state.input = snapshot.input_buffer;
        Ok(())
    }
}
