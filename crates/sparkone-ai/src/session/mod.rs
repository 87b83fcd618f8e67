//! Conversation session management.
//!
//! A `Session` holds the conversation history and input buffer, and runs
//! at most one send at a time: probe the host, request a completion, and
//! fold the outcome back into history as an assistant or system turn.

mod chat;
mod manager;
mod snapshot;
mod types;


pub use manager::Session;
pub use snapshot::{SessionSnapshot, SnapshotError, SNAPSHOT_VERSION};
pub use types::{
    FailureKind, PlaybackHook, Reachability, SessionError, SubmitOutcome,
    CONNECTIVITY_ERROR_MESSAGE, SERVER_ERROR_MESSAGE, TIMEOUT_MESSAGE,
};
