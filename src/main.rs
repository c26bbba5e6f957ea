//! Strictly Extreme - CLI
//!
//! Interactive terminal game and headless scripted play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_extreme::{run_script, run_tui, GameConfig, GameEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { reset_delay_ms } => {
            let config = match reset_delay_ms {
                Some(ms) => config.with_reset_delay_ms(ms),
                None => config,
            };
            run_play(config).await
        }
        Command::Simulate {
            json,
            auto_reset,
            moves,
        } => run_simulate(config, &moves, json, auto_reset),
    }
}

/// Run the interactive terminal game
async fn run_play(config: GameConfig) -> Result<()> {
    // Log to a file so tracing output doesn't tear the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(&config).await
}

/// Play a scripted list of moves and print the outcome
#[instrument(skip(config))]
fn run_simulate(config: GameConfig, moves: &[usize], json: bool, auto_reset: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    info!(moves = moves.len(), "Simulating game");

    let mut engine = GameEngine::with_reset_delay(config.reset_delay());
    let steps = run_script(&mut engine, moves, auto_reset);

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            println!("{}", step);
        }
        println!();
        println!("{}", engine.board().display());
        println!();
        println!("{}", engine.status_text());
    }

    Ok(())
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
