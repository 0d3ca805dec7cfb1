//! Remote Chess - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use remote_chess::{ClientConfig, GameService, RestGameClient};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,remote_chess=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { server_url, config } => run_play(config, server_url).await,
        Command::Board { server_url, config } => run_board(config, server_url).await,
    }
}

/// Run the terminal client
async fn run_play(config_path: PathBuf, server_url: Option<String>) -> Result<()> {
    let config = ClientConfig::load(Some(config_path.as_path()), server_url)?;

    // Log to a file so tracing output does not tear the terminal UI
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    remote_chess::run_tui(config).await
}

/// Fetch and print the current board
#[instrument(skip_all)]
async fn run_board(config_path: PathBuf, server_url: Option<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::load(Some(config_path.as_path()), server_url)?;
    let client = RestGameClient::from_config(&config)?;

    info!(server_url = %client.base_url(), "Fetching board");
    let board = client.fetch_state().await?;
    println!("{}", board);
    Ok(())
}
