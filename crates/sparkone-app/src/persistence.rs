//! Session snapshot file: resolve, load on start, save on exit.

use std::path::{Path, PathBuf};

use sparkone_ai::{Session, SessionSnapshot};
use sparkone_common::SparkoneError;
use tracing::{info, warn};

/// Platform default snapshot location.
pub fn default_snapshot_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("sparkone").join("session.json"))
}

/// Restore `session` from `path` if a snapshot exists there.
///
/// Returns whether a snapshot was restored. A corrupt file is reported,
/// not fatal: the session simply starts empty.
pub fn load_into(session: &Session, path: &Path) -> bool {
    let json = match std::fs::read_to_string(path) {
        Ok(j) => j,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return false,
        Err(e) => {
            warn!("failed to read snapshot {}: {e}", path.display());
            return false;
        }
    };

    let restored = SessionSnapshot::from_json(&json)
        .map_err(sparkone_ai::SessionError::from)
        .and_then(|snapshot| session.restore(snapshot));

    match restored {
        Ok(()) => {
            info!("restored session from {}", path.display());
            true
        }
        Err(e) => {
            warn!("ignoring snapshot {}: {e}", path.display());
            false
        }
    }
}

/// Write the session snapshot to `path` (write to `.tmp`, then rename).
pub fn save(session: &Session, path: &Path) -> Result<(), SparkoneError> {
    let json = session
        .snapshot()
        .to_json()
        .map_err(|e| SparkoneError::Snapshot(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &json)?;
    }

    info!("saved session to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use sparkone_ai::{CompletionClient, CompletionResult, Prober, Turn};

    struct Offline;

    #[async_trait]
    impl Prober for Offline {
        async fn is_reachable(&self, _host: &str) -> bool {
            false
        }
    }

    #[async_trait]
    impl CompletionClient for Offline {
        async fn send(&self, _conversation: &[Turn]) -> CompletionResult {
            CompletionResult::ConnectivityFailure
        }
    }

    fn offline_session() -> Session {
        Session::new("brain", Arc::new(Offline), Arc::new(Offline))
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = offline_session();
        session.submit("hello").await.unwrap();
        session.set_input("draft");
        save(&session, &path).unwrap();

        let restored = offline_session();
        assert!(load_into(&restored, &path));
        assert_eq!(restored.conversation(), session.conversation());
        assert_eq!(restored.input(), "draft");
        assert!(!restored.is_pending());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let session = offline_session();
        assert!(!load_into(&session, &dir.path().join("absent.json")));
        assert_eq!(session.turn_count(), 0);
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let session = offline_session();
        assert!(!load_into(&session, &path));
        assert_eq!(session.turn_count(), 0);
    }
}
