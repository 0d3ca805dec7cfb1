//! Command-line interface for remote_chess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Remote Chess - play against a remote automated opponent
#[derive(Parser, Debug)]
#[command(name = "remote_chess")]
#[command(about = "Terminal chess client for a remote game service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game service URL (overrides config and environment)
        #[arg(long)]
        server_url: Option<String>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "remote_chess.toml")]
        config: PathBuf,
    },

    /// Print the service's current board and exit
    Board {
        /// Game service URL (overrides config and environment)
        #[arg(long)]
        server_url: Option<String>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "remote_chess.toml")]
        config: PathBuf,
    },
}
