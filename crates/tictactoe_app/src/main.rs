//! Tic Tac Toe - two players, one window.

use anyhow::Result;
use tictactoe_app::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the round results; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Tic Tac Toe");
    tictactoe_app::run(Settings::default())?;
    Ok(())
}
