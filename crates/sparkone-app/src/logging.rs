//! Logging setup.
//!
//! The subscriber is installed before anything else runs, with a filter
//! that can be swapped once the config file's `logging.level` is known.
//! `--log-level` and `RUST_LOG` outrank the config file.

use sparkone_config::schema::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub const DEFAULT_LOG_DIRECTIVE: &str = "sparkone=info";

pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    /// Set when the filter came from the command line or the environment.
    pinned: bool,
}

/// Pick the initial filter string. Returns whether it outranks the config.
fn initial_directive(cli: Option<&str>, env: Option<&str>) -> (String, bool) {
    let explicit = cli
        .or(env)
        .map(str::trim)
        .filter(|d| !d.is_empty());
    match explicit {
        Some(d) => (d.to_string(), true),
        None => (DEFAULT_LOG_DIRECTIVE.to_string(), false),
    }
}

/// Parse a comma-separated filter, falling back to the default on error.
fn filter_for(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("invalid log filter {directives:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    })
}

pub fn init(cli: Option<&str>) -> Logging {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (directives, pinned) = initial_directive(cli, env.as_deref());

    let (filter, handle) = reload::Layer::new(filter_for(&directives));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Logging { handle, pinned }
}

impl Logging {
    /// Apply the config file's level unless a higher-priority filter is set.
    pub fn apply_config(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(filter_for(level.directive())) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }
}
