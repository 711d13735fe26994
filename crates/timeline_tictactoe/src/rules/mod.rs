//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Nothing here is cached; callers
//! re-evaluate from the current snapshot whenever they need a verdict.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, evaluate_winner};
