//! Command-line interface for strictly_extreme.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extreme tic-tac-toe: three live marks each, the oldest one vanishes
#[derive(Parser, Debug)]
#[command(name = "strictly_extreme")]
#[command(about = "Extreme tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, global = true, default_value = "strictly_extreme.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse, digits 1-9, or arrows + Enter)
    Play {
        /// Override the delay between a win and the reset
        #[arg(long)]
        reset_delay_ms: Option<u64>,
    },

    /// Apply a scripted list of cell indices (0-8) and print the result
    Simulate {
        /// Print every outcome as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Fire the reset a win asks for before the next move
        #[arg(long)]
        auto_reset: bool,

        /// Cell indices, played alternately starting with X
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}
