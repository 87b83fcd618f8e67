//! Build the prober, completion client, and session from config.

use std::sync::Arc;
use std::time::Duration;

use sparkone_ai::{
    endpoint_host_port, CompletionConfig, HttpCompletionClient, Session, TcpProber, Turn,
};
use sparkone_common::{ConfigError, Event, EventBus, SparkoneError};
use sparkone_config::SparkoneConfig;

/// Host and port the liveness probe targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
}

/// Probe overrides win; otherwise the endpoint's own host and port are used.
pub fn probe_target(config: &SparkoneConfig) -> Result<ProbeTarget, SparkoneError> {
    let (endpoint_host, endpoint_port) = endpoint_host_port(&config.endpoint.base_url)
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    let host = match config.probe.host.trim() {
        "" => endpoint_host,
        h => h.to_string(),
    };
    let port = match config.probe.port {
        0 => endpoint_port,
        p => p,
    };
    Ok(ProbeTarget { host, port })
}

pub fn completion_config(config: &SparkoneConfig) -> CompletionConfig {
    let endpoint = &config.endpoint;
    CompletionConfig::new(endpoint.base_url.clone())
        .with_path(endpoint.path.clone())
        .with_mode(endpoint.mode.clone())
        .with_instruction_template(endpoint.instruction_template.clone())
        .with_timeouts(
            Duration::from_secs(endpoint.connect_timeout_secs.into()),
            Duration::from_secs(endpoint.read_timeout_secs.into()),
            Duration::from_secs(endpoint.request_timeout_secs.into()),
        )
}

pub fn prober(config: &SparkoneConfig, target: &ProbeTarget) -> Arc<TcpProber> {
    Arc::new(TcpProber::new(
        target.port,
        Duration::from_secs(config.probe.timeout_secs.into()),
    ))
}

/// Assemble a session whose replies are published on `bus` for playback.
pub fn build_session(
    config: &SparkoneConfig,
    target: &ProbeTarget,
    prober: Arc<TcpProber>,
    bus: Arc<EventBus>,
) -> Result<Session, SparkoneError> {
    let client = HttpCompletionClient::new(completion_config(config))
        .map_err(|e| SparkoneError::Network(e.to_string()))?;

    tracing::info!(
        url = %client.url(),
        probe = %format!("{}:{}", target.host, target.port),
        "completion endpoint configured"
    );

    Ok(
        Session::new(target.host.clone(), prober, Arc::new(client)).with_playback(Box::new(
            move |turn: &Turn| {
                bus.publish(Event::Reply {
                    turn_id: turn.id().to_string(),
                    text: turn.content().to_string(),
                });
            },
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_target_follows_endpoint_by_default() {
        let mut config = SparkoneConfig::default();
        config.endpoint.base_url = "http://192.168.1.176:5000/".into();

        let target = probe_target(&config).unwrap();
        assert_eq!(
            target,
            ProbeTarget {
                host: "192.168.1.176".into(),
                port: 5000
            }
        );
    }

    #[test]
    fn probe_overrides_win() {
        let mut config = SparkoneConfig::default();
        config.probe.host = "74.137.26.51".into();
        config.probe.port = 22;

        let target = probe_target(&config).unwrap();
        assert_eq!(target.host, "74.137.26.51");
        assert_eq!(target.port, 22);
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let mut config = SparkoneConfig::default();
        config.endpoint.base_url = "nope".into();
        assert!(matches!(
            probe_target(&config),
            Err(SparkoneError::Config(_))
        ));
    }

    #[test]
    fn completion_config_carries_endpoint_settings() {
        let mut config = SparkoneConfig::default();
        config.endpoint.instruction_template = "Vicuna-v1.1".into();
        config.endpoint.read_timeout_secs = 7;

        let completion = completion_config(&config);
        assert_eq!(completion.instruction_template, "Vicuna-v1.1");
        assert_eq!(completion.read_timeout, Duration::from_secs(7));
        assert_eq!(
            completion.url(),
            "http://127.0.0.1:5000/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn builds_idle_session_on_endpoint_host() {
        let config = SparkoneConfig::default();
        let target = probe_target(&config).unwrap();
        let bus = Arc::new(EventBus::new(8));
        let mut rx = bus.subscribe();

        let session = build_session(&config, &target, prober(&config, &target), bus).unwrap();
        assert_eq!(session.host(), "127.0.0.1");
        assert!(!session.is_pending());
        drop(session);
        assert!(rx.try_recv().is_err());
    }
}
