//! Tic-tac-toe with a time-travelling move history.
//!
//! # Architecture
//!
//! - **Game logic**: the [`timeline_tictactoe`] crate (controller, board view, rules)
//! - **TUI**: ratatui front end with keyboard and mouse input
//! - **Replay**: headless driver printing the board and move list
//! - **Config**: TOML preferences and tracing setup
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{MoveOrder, replay};
//!
//! let report = replay(&[0, 1, 4, 2, 8], None, MoveOrder::OldestFirst).unwrap();
//! assert_eq!(report.status_text(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration and logging
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Headless replay
pub use replay::{ReplayReport, replay};

// Crate-level exports - Terminal UI
pub use tui::{
    App, AppAction, Focus, HitMap, MoveListView, cell_rects, command_for, draw, move_cursor,
    run_tui,
};

// Crate-level exports - Game types
pub use timeline_tictactoe::{
    Board, BoardView, ClickRejected, Game, GameStatus, JumpError, MoveEntry, MoveOrder, Player,
    Position, Snapshot, Square, WinningLine,
};
