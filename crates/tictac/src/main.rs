//! tictac - N×N tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::OsRng;
use std::path::Path;
use tictac::{Cli, ComputerSeat, HumanSeat, Session, Settings};
use tictac_core::Game;
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let settings = Settings::resolve(cli.config.as_deref(), &cli.overrides())
        .context("Failed to load settings")?;

    play(settings).await
}

/// Runs one game on stdin/stdout.
#[instrument]
async fn play(settings: Settings) -> Result<()> {
    let game = Game::new(*settings.game());
    let human = HumanSeat::new(BufReader::new(tokio::io::stdin()));
    let computer = ComputerSeat::new(OsRng, *settings.think());

    let mut session = Session::new(
        game,
        Box::new(human),
        Box::new(computer),
        std::io::stdout(),
        *settings.ascii(),
    );
    let outcome = session.run().await?;
    info!(%outcome, "Exiting");
    Ok(())
}

/// Logs go to a file so they never interleave with the board.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    info!(path = %log_file.display(), "Tracing initialized");
    Ok(())
}
