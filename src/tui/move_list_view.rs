//! View state for the move list panel.

use ratatui::widgets::ListState;
use timeline_tictactoe::{Game, MoveEntry, MoveOrder, describe_moves};
use tracing::{debug, instrument};

/// Display order and selection of the move list.
///
/// Owned by the UI alone: toggling the order or moving the selection never
/// touches the game.
#[derive(Debug, Default)]
pub struct MoveListView {
    order: MoveOrder,
    state: ListState,
}

impl MoveListView {
    /// Creates a view with the given order and the first row selected.
    pub fn new(order: MoveOrder) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { order, state }
    }

    /// Current display order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Selected display row.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Mutable list state for rendering.
    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Entries of the game's history in display order.
    pub fn entries(&self, game: &Game) -> Vec<MoveEntry> {
        self.order
            .arrange(describe_moves(game.history(), game.current_move()))
    }

    /// Reverses the display order, keeping the same entry selected.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self, len: usize) {
        self.order = self.order.toggle();
        if let Some(row) = self.state.selected() {
            if row < len {
                self.state.select(Some(len - 1 - row));
            }
        }
        debug!(order = ?self.order, "Move list order toggled");
    }

    /// Moves selection up, wrapping to the bottom.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let row = match self.state.selected() {
            Some(row) if row > 0 => row - 1,
            _ => len - 1,
        };
        self.state.select(Some(row));
    }

    /// Moves selection down, wrapping to the top.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let row = match self.state.selected() {
            Some(row) => (row + 1) % len,
            None => 0,
        };
        self.state.select(Some(row));
    }

    /// Selects a display row, clamped to the list.
    pub fn select(&mut self, row: usize, len: usize) {
        if len > 0 {
            self.state.select(Some(row.min(len - 1)));
        }
    }

    /// Keeps the same move selected after the history went from `old_len`
    /// to `new_len` entries.
    ///
    /// A move that no longer exists gives way to the newest remaining one.
    pub fn history_changed(&mut self, old_len: usize, new_len: usize) {
        if new_len == 0 {
            return;
        }
        let row = self.state.selected().unwrap_or(0);
        let mv = match self.order {
            MoveOrder::OldestFirst => row,
            MoveOrder::NewestFirst => old_len.saturating_sub(1).saturating_sub(row),
        }
        .min(new_len - 1);
        let row = match self.order {
            MoveOrder::OldestFirst => mv,
            MoveOrder::NewestFirst => new_len - 1 - mv,
        };
        self.state.select(Some(row));
    }

    /// Move index the given display row would jump to.
    ///
    /// `None` for the row of the viewed move and for rows past the end.
    pub fn jump_target(&self, game: &Game, row: usize) -> Option<usize> {
        self.entries(game).get(row).and_then(MoveEntry::jump_target)
    }
}
