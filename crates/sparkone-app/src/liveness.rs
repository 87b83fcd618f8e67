//! Background liveness probe of the completion host.

use std::sync::Arc;
use std::time::Duration;

use sparkone_ai::Prober;
use sparkone_common::{Event, EventBus};
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Probe `host` every `interval` and publish changes in reachability.
///
/// The first result is always published. Stops on `Event::Shutdown`.
pub async fn run(
    prober: Arc<dyn Prober>,
    host: String,
    interval: Duration,
    bus: Arc<EventBus>,
) {
    let mut shutdown = bus.subscribe();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut last: Option<bool> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reachable = prober.is_reachable(&host).await;
                debug!(%host, reachable, "liveness probe");
                if last != Some(reachable) {
                    info!(%host, reachable, "reachability changed");
                    last = Some(reachable);
                    bus.publish(Event::Reachability { host: host.clone(), reachable });
                }
            }
            event = shutdown.recv() => match event {
                Ok(Event::Shutdown) | Err(broadcast::error::RecvError::Closed) => break,
                _ => {}
            },
        }
    }
    debug!("liveness probe stopped");
}
