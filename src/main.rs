//! Tic-Tac-Toe Timeline - CLI entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::{
    AppConfig, Cli, Command, MoveOrder, init_file_logging, init_stderr_logging, replay, run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay {
            cells,
            jump_to,
            newest_first,
            json,
        } => run_replay(&config, &cells, jump_to, newest_first, json),
    }
}

/// Run the interactive terminal UI
fn run_play(config: &AppConfig) -> Result<()> {
    init_file_logging(config)?;
    run_tui(config)
}

/// Run a headless replay and print the report
#[instrument(skip(config, cells))]
fn run_replay(
    config: &AppConfig,
    cells: &[u8],
    jump_to: Option<usize>,
    newest_first: bool,
    json: bool,
) -> Result<()> {
    init_stderr_logging(config);

    let order = if newest_first || *config.newest_first() {
        MoveOrder::NewestFirst
    } else {
        MoveOrder::OldestFirst
    };
    info!(clicks = cells.len(), ?order, "Replaying clicks");

    let report = replay(cells, jump_to, order).context("Replay failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
