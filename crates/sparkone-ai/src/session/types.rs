//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::Turn;

use super::snapshot::SnapshotError;

/// Shown when the completion host fails its reachability probe, or the
/// transport fails underneath a request.
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Network Connectivity Error. Please Check your Internet Connection and Try Again.";

/// Shown when a completion request exceeds its deadline.
pub const TIMEOUT_MESSAGE: &str = "Socket Timeout Exception";

/// Shown when the endpoint answers with an error status or an unusable body.
pub const SERVER_ERROR_MESSAGE: &str = "The SparkOne Brain returned an error. Please Try Again.";

/// Callback receiving every assistant turn appended by `submit`.
pub type PlaybackHook = Box<dyn Fn(&Turn) + Send + Sync>;

/// Errors returned locally by the session; nothing is appended for these.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("input is empty")]
    InvalidInput,
    #[error("session is busy with another request")]
    Busy,
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Why a submission ended in a `system` notice instead of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The reachability probe failed; no request was sent.
    Unreachable,
    TimedOut,
    ConnectivityFailure,
    ServerError(Option<u16>),
}

/// Result of a valid submission. Either way, the session is idle again.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Reply(Turn),
    Notice { kind: FailureKind, turn: Turn },
}

impl SubmitOutcome {
    /// The turn appended after the user's turn.
    pub fn turn(&self) -> &Turn {
        match self {
            SubmitOutcome::Reply(turn) | SubmitOutcome::Notice { turn, .. } => turn,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, SubmitOutcome::Reply(_))
    }
}

/// Last known probe outcome for the session's completion host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reachability {
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

impl From<bool> for Reachability {
    fn from(reachable: bool) -> Self {
        if reachable {
            Reachability::Reachable
        } else {
            Reachability::Unreachable
        }
    }
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SessionError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
