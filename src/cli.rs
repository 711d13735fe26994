//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a move history you can travel through
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "tictactoe_timeline.toml")]
    pub config: PathBuf,

    /// Override the log file used by the interactive UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Click cells headlessly and print the resulting board and move list
    Replay {
        /// Cells to click in order (0-8, row-major)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// Jump to this move after the clicks
        #[arg(long)]
        jump_to: Option<usize>,

        /// List the latest move first
        #[arg(long)]
        newest_first: bool,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}
