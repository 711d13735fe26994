//! Current move invariant: the viewed index always points into the history.

use super::Invariant;
use crate::Game;

/// Invariant: `0 <= current_move < history.len()`.
pub struct CurrentMoveInBoundsInvariant;

impl Invariant<Game> for CurrentMoveInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Snapshot;

    #[test]
    fn test_new_game_holds() {
        assert!(CurrentMoveInBoundsInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_dangling_index_violates() {
        let game = Game::from_history_unchecked(vec![Snapshot::initial()], 3);
        assert!(!CurrentMoveInBoundsInvariant::holds(&game));
    }
}
