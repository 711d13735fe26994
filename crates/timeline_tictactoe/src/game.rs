//! Game controller: the snapshot history and the viewed move.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::{Board, BoardView, GameStatus, InvalidHistory, JumpError, Position, Snapshot};

/// Owns the history of snapshots and the index of the one being viewed.
///
/// Whose turn it is follows from the parity of the viewed index. Playing
/// from an earlier snapshot discards every later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    history: Vec<Snapshot>,
    current_move: usize,
}

impl Game {
    /// Creates a game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_move: 0,
        }
    }

    /// Builds a game from a recorded history and a viewed index.
    ///
    /// The parts must satisfy every [`HistoryInvariants`] member.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_history(
        history: Vec<Snapshot>,
        current_move: usize,
    ) -> Result<Self, InvalidHistory> {
        let game = Self::from_history_unchecked(history, current_move);
        HistoryInvariants::check_all(&game).map_err(InvalidHistory::new)?;
        Ok(game)
    }

    /// Builds a game without checking the history invariants.
    pub(crate) fn from_history_unchecked(history: Vec<Snapshot>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }

    /// Every snapshot reached so far, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The viewed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// Squares of the viewed snapshot.
    pub fn current_squares(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Board component view over the viewed snapshot.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_snapshot(), self.x_is_next())
    }

    /// Status of the viewed snapshot.
    pub fn status(&self) -> GameStatus {
        self.board_view().status()
    }

    /// Appends `next` after the viewed snapshot, discarding later ones.
    ///
    /// `next` must be a single-move successor of the viewed snapshot; the
    /// history invariants are asserted in debug builds.
    #[instrument(skip(self, next), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn play(&mut self, next: Snapshot) {
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            discarded,
            current_move = self.current_move,
            last_move = ?next.last_move(),
            "Snapshot played"
        );
        assert_invariants(self);
    }

    /// Views the snapshot at `mv`.
    ///
    /// Indices outside the history are rejected and leave the game as is.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) -> Result<(), JumpError> {
        if mv >= self.history.len() {
            debug!(len = self.history.len(), "Jump out of range");
            return Err(JumpError::OutOfRange {
                requested: mv,
                len: self.history.len(),
            });
        }
        self.current_move = mv;
        debug!(status = %self.status(), "Jumped");
        Ok(())
    }

    /// Clicks a cell on the viewed board.
    ///
    /// Returns whether a move was played. Rejected clicks change nothing.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> bool {
        match self.board_view().click(pos) {
            Ok(next) => {
                self.play(next);
                true
            }
            Err(reason) => {
                debug!(%reason, "Click ignored");
                false
            }
        }
    }

    /// Drops the whole history and starts from the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len() - 1, "Restarting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Asserts that all history invariants hold (debug builds only).
fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions) {
        if let Err(violations) = HistoryInvariants::check_all(game) {
            panic!("{}", InvalidHistory::new(violations));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn play_cells(game: &mut Game, cells: &[usize]) {
        for &i in cells {
            assert!(game.click(Position::ALL[i]), "cell {} should be playable", i);
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.x_is_next());
        assert_eq!(game.current_squares(), &Board::new());
    }

    #[test]
    fn test_turn_follows_parity() {
        let mut game = Game::new();
        play_cells(&mut game, &[4]);
        assert!(!game.x_is_next());
        play_cells(&mut game, &[0]);
        assert!(game.x_is_next());
        assert_eq!(
            game.current_squares().get(Position::TopLeft),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_play_from_past_truncates_future() {
        let mut game = Game::new();
        play_cells(&mut game, &[0, 1, 2]);
        let s0 = game.history()[0];
        let s1 = game.history()[1];

        game.jump_to(1).unwrap();
        let s1_alt = game.board_view().click(Position::Center).unwrap();
        game.play(s1_alt);

        assert_eq!(game.history(), &[s0, s1, s1_alt]);
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = Game::new();
        play_cells(&mut game, &[0, 1, 2]);
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert!(!game.x_is_next());
        assert_eq!(game.current_squares().occupied(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut game = Game::new();
        play_cells(&mut game, &[0]);
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(JumpError::OutOfRange { requested: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_click_on_occupied_changes_nothing() {
        let mut game = Game::new();
        play_cells(&mut game, &[4]);
        let before = game.clone();
        assert!(!game.click(Position::Center));
        assert_eq!(game, before);
    }

    #[test]
    fn test_from_history_accepts_played_history() {
        let mut game = Game::new();
        play_cells(&mut game, &[4, 0, 8]);
        let rebuilt = Game::from_history(game.history().to_vec(), 1).unwrap();
        assert_eq!(rebuilt.current_move(), 1);
        assert_eq!(rebuilt.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_from_history_rejects_dangling_index() {
        let err = Game::from_history(vec![Snapshot::initial()], 3).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(
            err.to_string(),
            "Invalid history: Current move indexes an existing snapshot"
        );
    }

    #[test]
    fn test_from_history_rejects_empty_history() {
        assert!(Game::from_history(Vec::new(), 0).is_err());
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        play_cells(&mut game, &[4, 0]);
        game.restart();
        assert_eq!(game, Game::new());
    }
}
