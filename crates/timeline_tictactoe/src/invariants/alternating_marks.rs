//! Alternating marks invariant: X moves first and players strictly alternate.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: in every snapshot, X count minus O count is 0 or 1.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().all(|snap| {
            let x = snap.board().count(Player::X);
            let o = snap.board().count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Every snapshot has as many X marks as O marks, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Snapshot, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut game = Game::new();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.click(Position::ALL[i]);
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        let game = Game::from_history_unchecked(
            vec![Snapshot::initial(), Snapshot::from_parts(board, Some(Position::Center))],
            1,
        );
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
