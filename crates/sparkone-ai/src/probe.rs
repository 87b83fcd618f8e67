//! Host reachability probe.
//!
//! Resolves the host and attempts a TCP connection to the completion
//! port under one overall deadline. A completed handshake or an explicit
//! refusal both prove the host is up; anything else reads as unreachable.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;

use crate::{AiError, Prober};

/// TCP-connect reachability prober.
#[derive(Debug, Clone)]
pub struct TcpProber {
    port: u16,
    timeout: Duration,
}

impl TcpProber {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn is_reachable(&self, host: &str) -> bool {
        within_deadline(self.timeout, host, probe(host, self.port)).await
    }
}

/// A check that misses its deadline counts as unreachable.
async fn within_deadline<F>(timeout: Duration, host: &str, check: F) -> bool
where
    F: Future<Output = bool>,
{
    match tokio::time::timeout(timeout, check).await {
        Ok(reachable) => reachable,
        Err(_) => {
            debug!(host, ?timeout, "probe timed out");
            false
        }
    }
}

async fn probe(host: &str, port: u16) -> bool {
    let addrs = match tokio::net::lookup_host((host, port)).await {
        Ok(addrs) => addrs,
        Err(e) => {
            debug!(host, "probe resolution failed: {e}");
            return false;
        }
    };

    for addr in addrs {
        match TcpStream::connect(addr).await {
            Ok(_) => return true,
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionRefused => {
                debug!(%addr, "probe refused, host is up");
                return true;
            }
            Err(e) => debug!(%addr, "probe connect failed: {e}"),
        }
    }
    false
}

/// Host and port of an endpoint base URL, with the scheme's default port
/// filled in when none is given.
pub fn endpoint_host_port(base_url: &str) -> Result<(String, u16), AiError> {
    let url = reqwest::Url::parse(base_url).map_err(|e| AiError::InvalidUrl(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| AiError::InvalidUrl(format!("{base_url} has no host")))?
        .trim_start_matches('[')
        .trim_end_matches(']')
        .to_string();
    let port = url
        .port_or_known_default()
        .ok_or_else(|| AiError::InvalidUrl(format!("{base_url} has no port")))?;
    Ok((host, port))
}
