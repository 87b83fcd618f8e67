mod cli;
mod input;
mod liveness;
mod logging;
mod persistence;
mod repl;
mod speaker;
mod wiring;

use std::sync::Arc;
use std::time::Duration;

use sparkone_common::{Event, EventBus};
use sparkone_config::schema::SparkoneConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args = cli::parse();

    let logging = logging::init(args.log_level.as_deref());

    tracing::info!("SparkOne v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = sparkone_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SparkoneConfig::default()
    });
    logging.apply_config(config.logging.level);

    if args.print_config {
        println!("{}", sparkone_config::config_to_json(&config));
        return;
    }

    if let Err(e) = run(config, args).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

async fn run(config: SparkoneConfig, args: cli::Args) -> sparkone_common::Result<()> {
    let bus = Arc::new(EventBus::new(64));

    let target = wiring::probe_target(&config)?;
    let prober = wiring::prober(&config, &target);
    let session = wiring::build_session(&config, &target, prober.clone(), bus.clone())?;
    tracing::info!(session = %session.id(), "session created");

    let snapshot_path = if config.session.persist {
        args.snapshot
            .clone()
            .or_else(|| config.session.snapshot_path.clone())
            .or_else(persistence::default_snapshot_path)
    } else {
        None
    };
    if let Some(ref path) = snapshot_path {
        persistence::load_into(&session, path);
    }

    let speaker = speaker::Speaker::from_config(&config.speech, args.no_speech);
    if !speaker.is_audible() {
        tracing::info!("speech playback disabled, replies are logged only");
    }
    let front_events = bus.subscribe();
    let speaker_task = tokio::spawn(speaker.run(bus.subscribe()));
    let liveness_task = tokio::spawn(liveness::run(
        prober,
        target.host.clone(),
        Duration::from_secs(config.probe.interval_secs.into()),
        bus.clone(),
    ));

    let lines = input::spawn_stdin_reader()?;
    let mut front = repl::Repl::new(&session, std::io::stdout());
    tokio::select! {
        result = front.run(lines, front_events) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
    }

    bus.publish(Event::Shutdown);
    if let Err(e) = liveness_task.await {
        tracing::warn!("liveness task ended abnormally: {e}");
    }
    if let Err(e) = speaker_task.await {
        tracing::warn!("speaker task ended abnormally: {e}");
    }

    if let Some(ref path) = snapshot_path {
        persistence::save(&session, path)?;
    }
    Ok(())
}
