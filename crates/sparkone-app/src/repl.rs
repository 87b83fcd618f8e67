//! Line-oriented front end.
//!
//! Each input line is submitted as a user turn; `/`-prefixed lines are
//! local commands. Turns render as `role: content`.

use std::io::Write;

use sparkone_ai::{Reachability, Session, SessionError, SubmitOutcome};
use sparkone_common::Event;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};

pub const ONLINE_STATUS: &str = "SparkOne Brain Online";
pub const UNREACHABLE_STATUS: &str = "SparkOne Brain Unreachable";
const WORKING: &str = "Working ....";

const HELP: &str = "commands: /status  /usage  /history  /quit";

enum Command {
    Quit,
    Status,
    Usage,
    History,
    Help,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let cmd = line.strip_prefix('/')?;
    Some(match cmd.trim() {
        "quit" | "exit" => Command::Quit,
        "status" => Command::Status,
        "usage" => Command::Usage,
        "history" => Command::History,
        "help" => Command::Help,
        other => Command::Unknown(other.to_string()),
    })
}

/// Only a confirmed probe counts as online; no result yet reads as unreachable.
fn status_line(reachability: Reachability) -> &'static str {
    match reachability {
        Reachability::Reachable => ONLINE_STATUS,
        Reachability::Unknown | Reachability::Unreachable => UNREACHABLE_STATUS,
    }
}

pub struct Repl<'s, W> {
    session: &'s Session,
    out: W,
    /// Latest result from either the liveness task or a submission.
    reachability: Reachability,
}

impl<'s, W: Write> Repl<'s, W> {
    pub fn new(session: &'s Session, out: W) -> Self {
        Self {
            session,
            out,
            reachability: Reachability::Unknown,
        }
    }

    /// Run until input ends, `/quit`, or the event bus shuts down.
    ///
    /// Pending bus events are handled before the next input line.
    pub async fn run(
        &mut self,
        mut lines: mpsc::UnboundedReceiver<String>,
        mut events: broadcast::Receiver<Event>,
    ) -> std::io::Result<()> {
        for turn in self.session.conversation() {
            writeln!(self.out, "{turn}")?;
        }
        self.prompt()?;

        loop {
            tokio::select! {
                biased;

                event = events.recv() => match event {
                    Ok(Event::Reachability { reachable, .. }) => {
                        self.observe(Reachability::from(reachable))?;
                    }
                    Ok(Event::Shutdown) | Err(broadcast::error::RecvError::Closed) => break,
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        debug!("front end lagged, skipped {n} events");
                    }
                },
                line = lines.recv() => {
                    let Some(line) = line else { break };
                    if !self.handle_line(&line).await? {
                        break;
                    }
                    self.prompt()?;
                }
            }
        }
        self.out.flush()
    }

    /// Returns `false` when the loop should stop.
    async fn handle_line(&mut self, line: &str) -> std::io::Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parse_command(line) {
            Some(Command::Quit) => return Ok(false),
            Some(Command::Status) => writeln!(self.out, "{}", status_line(self.reachability))?,
            Some(Command::Usage) => {
                let tracker = self.session.tracker();
                let total = tracker.total();
                writeln!(
                    self.out,
                    "{} calls, {} prompt + {} completion = {} tokens",
                    tracker.call_count(),
                    total.prompt_tokens,
                    total.completion_tokens,
                    tracker.total_tokens()
                )?;
            }
            Some(Command::History) => {
                for turn in self.session.conversation() {
                    writeln!(self.out, "{turn}")?;
                }
            }
            Some(Command::Help) => writeln!(self.out, "{HELP}")?,
            Some(Command::Unknown(cmd)) => {
                writeln!(self.out, "unknown command: /{cmd}")?;
                writeln!(self.out, "{HELP}")?;
            }
            None => self.send(line).await?,
        }
        Ok(true)
    }

    async fn send(&mut self, text: &str) -> std::io::Result<()> {
        self.session.set_input(text);
        writeln!(self.out, "{WORKING}")?;
        self.out.flush()?;

        match self.session.submit_input().await {
            Ok(SubmitOutcome::Reply(turn)) | Ok(SubmitOutcome::Notice { turn, .. }) => {
                writeln!(self.out, "{turn}")?;
            }
            Err(SessionError::Busy) => writeln!(self.out, "still working on the last message")?,
            Err(e) => warn!("submit rejected: {e}"),
        }
        self.observe(self.session.reachability())
    }

    /// Record a probe result, printing the status line when it changes.
    fn observe(&mut self, reachability: Reachability) -> std::io::Result<()> {
        if reachability == Reachability::Unknown || reachability == self.reachability {
            return Ok(());
        }
        self.reachability = reachability;
        writeln!(self.out, "{}", status_line(reachability))
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sparkone_ai::{
        CompletionClient, CompletionResult, Prober, TokenUsage, Turn, CONNECTIVITY_ERROR_MESSAGE,
    };
    use sparkone_common::EventBus;
    use std::sync::Arc;

    struct Fixed(bool);

    #[async_trait]
    impl Prober for Fixed {
        async fn is_reachable(&self, _host: &str) -> bool {
            self.0
        }
    }

    struct Echo;

    #[async_trait]
    impl CompletionClient for Echo {
        async fn send(&self, conversation: &[Turn]) -> CompletionResult {
            let last = conversation.last().map(|t| t.content()).unwrap_or_default();
            CompletionResult::Success {
                turn: Turn::assistant(format!("echo {last}")),
                usage: TokenUsage {
                    prompt_tokens: 3,
                    completion_tokens: 2,
                },
            }
        }
    }

    /// Feed `input` line by line, with `events` already queued on the bus.
    async fn drive_with(session: &Session, input: &str, events: Vec<Event>) -> String {
        let bus = EventBus::new(8);
        let rx = bus.subscribe();
        for event in events {
            bus.publish(event);
        }

        let (tx, lines) = mpsc::unbounded_channel();
        for line in input.lines() {
            tx.send(line.to_string()).unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        Repl::new(session, &mut out).run(lines, rx).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    async fn drive(session: &Session, input: &str) -> String {
        drive_with(session, input, Vec::new()).await
    }

    fn reachability(reachable: bool) -> Event {
        Event::Reachability {
            host: "brain".into(),
            reachable,
        }
    }

    #[tokio::test]
    async fn renders_reply_and_status() {
        let session = Session::new("brain", Arc::new(Fixed(true)), Arc::new(Echo));
        let out = drive(&session, "hello\n/usage\n/quit\nignored\n").await;

        assert!(out.contains(WORKING));
        assert!(out.contains("assistant: echo hello"));
        assert!(out.contains(ONLINE_STATUS));
        assert!(out.contains("1 calls, 3 prompt + 2 completion = 5 tokens"));
        assert_eq!(session.turn_count(), 2);
    }

    #[tokio::test]
    async fn unreachable_host_shows_notice() {
        let session = Session::new("brain", Arc::new(Fixed(false)), Arc::new(Echo));
        let out = drive(&session, "hello\n").await;

        assert!(out.contains(&format!("system: {CONNECTIVITY_ERROR_MESSAGE}")));
        assert!(out.contains(UNREACHABLE_STATUS));
    }

    #[tokio::test]
    async fn commands_do_not_submit() {
        let session = Session::new("brain", Arc::new(Fixed(true)), Arc::new(Echo));
        let out = drive(&session, "\n/help\n/bogus\n/status\n").await;

        assert!(out.contains(HELP));
        assert!(out.contains("unknown command: /bogus"));
        assert_eq!(session.turn_count(), 0);
    }

    #[tokio::test]
    async fn restored_history_is_shown_first() {
        let session = Session::new("brain", Arc::new(Fixed(true)), Arc::new(Echo));
        session.submit("earlier").await.unwrap();

        let out = drive(&session, "").await;
        assert!(out.starts_with("user: earlier\nassistant: echo earlier\n"));
    }

    #[tokio::test]
    async fn shutdown_event_stops_loop() {
        let session = Session::new("brain", Arc::new(Fixed(true)), Arc::new(Echo));
        let bus = EventBus::new(8);
        let rx = bus.subscribe();
        bus.publish(Event::Shutdown);

        let (_keep_open, lines) = mpsc::unbounded_channel();
        let mut out = Vec::new();
        Repl::new(&session, &mut out).run(lines, rx).await.unwrap();
        assert_eq!(session.turn_count(), 0);
    }

    #[tokio::test]
    async fn status_before_any_result_is_unreachable() {
        let session = Session::new("brain", Arc::new(Fixed(false)), Arc::new(Echo));
        let out = drive(&session, "/status\n").await;

        assert!(out.contains(UNREACHABLE_STATUS));
        assert!(!out.contains(ONLINE_STATUS));
    }

    #[tokio::test]
    async fn status_follows_liveness_events() {
        let session = Session::new("brain", Arc::new(Fixed(true)), Arc::new(Echo));
        let out = drive_with(&session, "/status\n", vec![reachability(false)]).await;

        assert_eq!(out, format!("> {UNREACHABLE_STATUS}\n{UNREACHABLE_STATUS}\n> "));
    }

    #[tokio::test]
    async fn liveness_recovery_reads_online() {
        let session = Session::new("brain", Arc::new(Fixed(true)), Arc::new(Echo));
        let out = drive_with(
            &session,
            "/status\n",
            vec![reachability(false), reachability(true)],
        )
        .await;

        assert!(out.ends_with(&format!("{ONLINE_STATUS}\n{ONLINE_STATUS}\n> ")));
    }

    #[tokio::test]
    async fn submission_result_updates_status() {
        let session = Session::new("brain", Arc::new(Fixed(false)), Arc::new(Echo));
        let out = drive_with(&session, "hello\n/status\n", vec![reachability(true)]).await;

        assert!(out.ends_with(&format!("{UNREACHABLE_STATUS}\n> {UNREACHABLE_STATUS}\n> ")));
    }
}
