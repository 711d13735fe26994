//! Headless replay: drive the controller from a list of clicks.

use derive_getters::Getters;
use serde::Serialize;
use timeline_tictactoe::{
    Game, GameStatus, JumpError, MoveEntry, MoveOrder, Position, describe_moves,
};
use tracing::{debug, info, instrument};

/// Outcome of a headless replay, printable as text or JSON.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct ReplayReport {
    /// Clicks that were ignored, as cell indices.
    ignored: Vec<usize>,
    /// Index of the viewed snapshot.
    current_move: usize,
    /// Status of the viewed snapshot.
    status: GameStatus,
    /// Status line text.
    status_text: String,
    /// Viewed board, one string per row.
    rows: Vec<String>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Display order of `moves`.
    order: MoveOrder,
    #[serde(skip)]
    #[getter(skip)]
    game: Game,
}

impl ReplayReport {
    /// The controller state after the replay.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.rows.join("\n---+---+---\n"));
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out.push_str(&format!("\n\nMoves ({}):\n", self.order.label()));
        for entry in &self.moves {
            let marker = if entry.actionable { "  " } else { "> " };
            out.push_str(marker);
            out.push_str(&entry.description);
            out.push('\n');
        }
        if !self.ignored.is_empty() {
            let cells: Vec<String> = self.ignored.iter().map(|c| c.to_string()).collect();
            out.push_str(&format!("\nIgnored clicks: {}\n", cells.join(", ")));
        }
        out
    }
}

/// Clicks `cells` in order, then optionally jumps to `jump_to`.
///
/// Clicks the board would ignore are recorded in the report and otherwise
/// have no effect.
#[instrument(skip(cells), fields(clicks = cells.len()))]
pub fn replay(
    cells: &[u8],
    jump_to: Option<usize>,
    order: MoveOrder,
) -> Result<ReplayReport, JumpError> {
    let mut game = Game::new();
    let mut ignored = Vec::new();

    for &cell in cells {
        let accepted = Position::from_index(usize::from(cell)).is_some_and(|pos| game.click(pos));
        if !accepted {
            debug!(cell, "Replay click ignored");
            ignored.push(usize::from(cell));
        }
    }

    if let Some(mv) = jump_to {
        game.jump_to(mv)?;
    }

    let view = game.board_view();
    let rows = (0..3)
        .map(|row| {
            (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| format!(" {} ", view.board().get(pos).symbol()))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    let moves = order.arrange(describe_moves(game.history(), game.current_move()));
    let status = view.status();

    info!(
        current_move = game.current_move(),
        ignored = ignored.len(),
        status = %status,
        "Replay finished"
    );

    Ok(ReplayReport {
        ignored,
        current_move: game.current_move(),
        status,
        status_text: status.to_string(),
        rows,
        moves,
        order,
        game,
    })
}
