//! Pure tic-tac-toe logic with a time-travelling move history.
//!
//! # Architecture
//!
//! - **Game**: controller owning the snapshot history and the viewed move
//! - **BoardView**: read-only board component; turns clicks into snapshots
//! - **Move list**: descriptions of each history entry and display order
//! - **Rules**: pure win and draw evaluation
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::Center,
//!             Position::TopRight, Position::BottomRight] {
//!     game.click(pos);
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(0).unwrap();
//! assert!(game.x_is_next());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod error;
mod game;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;

pub use board_view::BoardView;
pub use error::{ClickRejected, InvalidHistory, JumpError};
pub use game::Game;
pub use move_list::{MoveEntry, MoveOrder, describe_move, describe_moves};
pub use position::Position;
pub use rules::{WinningLine, evaluate_winner, is_draw, is_full};
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
