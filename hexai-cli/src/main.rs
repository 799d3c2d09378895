//! HEXAI CLI - Command-line interface
//!
//! Commands:
//! - play: Play Hex against the engine in the terminal
//! - selfplay: Let the engine play both sides

mod play_cmd;
mod selfplay_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexai_cli::AppConfig;

#[derive(Parser)]
#[command(name = "hexai")]
#[command(about = "Play Hex against a minimax engine")]
struct Cli {
    /// JSON configuration file (engine depth, display glyphs)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "hexai_core=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine
    Play(play_cmd::PlayArgs),
    /// Engine versus engine
    Selfplay(selfplay_cmd::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, config),
        Commands::Selfplay(args) => selfplay_cmd::run(args, config),
    }
}

/// Logs go to stderr so they never mix with the board on stdout
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
