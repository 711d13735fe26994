//! Game status derived from a board and the turn flag.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::rules::{WinningLine, evaluate_winner, is_full};
use crate::{Board, Player};

/// Current status of the viewed board.
///
/// `Won` and `Draw` are terminal: clicks are ignored until the controller
/// jumps back to an earlier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line has been completed.
    #[display("Winner: {}", _0.player)]
    Won(WinningLine),
    /// Board is full with no line.
    #[display("It's a draw!")]
    Draw,
}

impl GameStatus {
    /// Evaluates the status of a board.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, x_is_next: bool) -> Self {
        if let Some(line) = evaluate_winner(board) {
            GameStatus::Won(line)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: Player::to_move(x_is_next),
            }
        }
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The winning line, if the game is won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_status_text_next_player() {
        let board = Board::new();
        assert_eq!(GameStatus::evaluate(&board, true).to_string(), "Next player: X");
        assert_eq!(GameStatus::evaluate(&board, false).to_string(), "Next player: O");
    }

    #[test]
    fn test_status_text_winner() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let status = GameStatus::evaluate(&board, true);
        assert_eq!(status.to_string(), "Winner: O");
        assert!(status.is_terminal());
        assert!(status.winning_line().is_some());
    }

    #[test]
    fn test_status_text_draw() {
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::X,
            Player::O, Player::X, Player::O,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip(marks) {
            board.set(*pos, Square::Occupied(mark));
        }
        let status = GameStatus::evaluate(&board, false);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.to_string(), "It's a draw!");
    }
}
