//! Single-step invariant: each snapshot adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{Game, Player, Square};

/// Invariant: `history[i]` is `history[i-1]` plus one mark in a previously
/// empty cell, that cell is the recorded last move, and the mark belongs to
/// the player whose turn it was.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied() != 0 || first.last_move().is_some() {
            return false;
        }

        history.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.last_move() else {
                return false;
            };
            let expected = Square::Occupied(Player::to_move(i % 2 == 0));
            let changed = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .filter(|(a, b)| a != b)
                .count();
            before.board().is_empty(pos) && after.board().get(pos) == expected && changed == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark into an empty cell of its predecessor"
    }
}
