use tokio::sync::broadcast;

/// Application-wide events fanned out to the front end and the speaker.
#[derive(Debug, Clone)]
pub enum Event {
    /// A new assistant reply was appended to the conversation.
    Reply { turn_id: String, text: String },
    /// Outcome of a background liveness probe.
    Reachability { host: String, reachable: bool },
    Shutdown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event, returning the number of receivers it reached.
    pub fn publish(&self, event: Event) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(_) => {
                tracing::trace!("event dropped, no subscribers");
                0
            }
        }
    }
}
