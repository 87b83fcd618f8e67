use std::path::PathBuf;

use clap::Parser;

/// SparkOne: a chat client for a remote chat-completion endpoint.
#[derive(Parser, Debug)]
#[command(name = "sparkone", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `sparkone=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Session snapshot file override.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Do not speak replies.
    #[arg(long)]
    pub no_speech: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
