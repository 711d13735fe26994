//! Immutable board snapshots recorded in the move history.

use serde::{Deserialize, Serialize};

use crate::{Board, Player, Position, Square};

/// One board configuration plus the cell played to reach it.
///
/// Snapshots are never mutated once created; playing a move builds a new
/// one with [`Snapshot::successor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Builds a snapshot from its parts.
    ///
    /// Does not check that `last_move` is consistent with the board; the
    /// history invariants catch inconsistent snapshots after a play.
    pub fn from_parts(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell played to reach this snapshot, `None` for the initial board.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Mark placed by the move that produced this snapshot.
    pub fn last_mark(&self) -> Option<Player> {
        self.last_move.and_then(|pos| self.board.get(pos).player())
    }

    /// New snapshot with `player` placed at `pos`.
    ///
    /// Overwrites whatever is in the cell; callers check occupancy first.
    pub fn successor(&self, pos: Position, player: Player) -> Self {
        let mut board = self.board;
        board.set(pos, Square::Occupied(player));
        Self {
            board,
            last_move: Some(pos),
        }
    }
}
