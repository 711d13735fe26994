//! Read-only view of the current board, turning clicks into play intents.

use tracing::{debug, instrument};

use crate::rules::{WinningLine, evaluate_winner};
use crate::{Board, ClickRejected, GameStatus, Player, Position, Snapshot};

/// What the board component sees: the viewed snapshot and whose turn it is.
///
/// A `BoardView` never changes game state. A successful
/// [`click`](BoardView::click) returns the snapshot the controller should
/// play.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    snapshot: &'a Snapshot,
    x_is_next: bool,
}

impl<'a> BoardView<'a> {
    /// Creates a view over a snapshot.
    pub fn new(snapshot: &'a Snapshot, x_is_next: bool) -> Self {
        Self {
            snapshot,
            x_is_next,
        }
    }

    /// The squares being shown.
    pub fn board(&self) -> &'a Board {
        self.snapshot.board()
    }

    /// Player whose mark the next click places.
    pub fn player(&self) -> Player {
        Player::to_move(self.x_is_next)
    }

    /// Status recomputed from the squares.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.board(), self.x_is_next)
    }

    /// Status line text, e.g. `"Next player: X"`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        evaluate_winner(self.board())
    }

    /// True exactly for cells of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }

    /// Returns the successor snapshot for a click on `pos`.
    ///
    /// Occupied cells and decided boards reject the click.
    #[instrument(skip(self), fields(player = %self.player()))]
    pub fn click(&self, pos: Position) -> Result<Snapshot, ClickRejected> {
        if !self.board().is_empty(pos) {
            return Err(ClickRejected::Occupied(pos));
        }
        if self.winning_line().is_some() {
            return Err(ClickRejected::GameOver);
        }
        let next = self.snapshot.successor(pos, self.player());
        debug!(position = %pos, "Click accepted");
        Ok(next)
    }
}
