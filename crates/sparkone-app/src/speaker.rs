//! Spoken playback of assistant replies.
//!
//! Replies arrive as `Event::Reply` on the bus and are spoken one after
//! another, in arrival order, by an external command.

use sparkone_common::{new_id, Event, SparkoneError};
use sparkone_config::schema::SpeechConfig;
use tokio::process::Command;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

pub struct Speaker {
    command: Option<(String, Vec<String>)>,
}

impl Speaker {
    /// A speaker with no command only logs what it would have said.
    pub fn from_config(config: &SpeechConfig, muted: bool) -> Self {
        let command = config.command.trim();
        let command = if !config.enabled || muted || command.is_empty() {
            None
        } else {
            Some((command.to_string(), config.args.clone()))
        };
        Self { command }
    }

    pub fn is_audible(&self) -> bool {
        self.command.is_some()
    }

    /// Speak one utterance and wait for the command to finish.
    pub async fn speak(&self, text: &str) -> Result<(), SparkoneError> {
        let utterance = new_id();
        let Some((program, args)) = &self.command else {
            info!(%utterance, "reply: {text}");
            return Ok(());
        };

        debug!(%utterance, program = %program, chars = text.len(), "speaking reply");
        let status = Command::new(program)
            .args(args)
            .arg(text)
            .status()
            .await
            .map_err(|e| SparkoneError::Speech(format!("failed to run {program}: {e}")))?;
        if !status.success() {
            return Err(SparkoneError::Speech(format!(
                "{program} exited with {status}"
            )));
        }
        Ok(())
    }

    /// Consume reply events until shutdown or the bus closes.
    pub async fn run(self, mut rx: broadcast::Receiver<Event>) {
        loop {
            match rx.recv().await {
                Ok(Event::Reply { turn_id, text }) => {
                    if let Err(e) = self.speak(&text).await {
                        warn!(turn = %turn_id, "{e}");
                    }
                }
                Ok(Event::Shutdown) => break,
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("speaker lagged, skipped {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        debug!("speaker stopped");
    }
}
