//! Human-readable descriptions of the move history.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Snapshot;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    /// Index into the history this row refers to.
    pub move_number: usize,
    /// Text shown for the row.
    pub description: String,
    /// False for the row of the viewed move, which is plain text.
    pub actionable: bool,
}

impl MoveEntry {
    /// Move index to jump to when the row is activated.
    ///
    /// `None` for the viewed move's row.
    pub fn jump_target(&self) -> Option<usize> {
        self.actionable.then_some(self.move_number)
    }
}

/// Display order of the move list.
///
/// Purely presentational; it never affects the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveOrder {
    /// Game start at the top.
    #[default]
    OldestFirst,
    /// Latest move at the top.
    NewestFirst,
}

impl MoveOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::OldestFirst => Self::NewestFirst,
            Self::NewestFirst => Self::OldestFirst,
        }
    }

    /// Short label for headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::OldestFirst => "oldest first",
            Self::NewestFirst => "newest first",
        }
    }

    /// Arranges entries (given oldest first) in this order.
    pub fn arrange(self, mut entries: Vec<MoveEntry>) -> Vec<MoveEntry> {
        if self == Self::NewestFirst {
            entries.reverse();
        }
        entries
    }
}

/// Describes a single history entry.
pub fn describe_move(snapshot: &Snapshot, move_number: usize, current_move: usize) -> String {
    let info = match (snapshot.last_move(), snapshot.last_mark()) {
        (Some(pos), Some(mark)) => format!(" ({} at {})", mark, pos.coordinates()),
        _ => String::new(),
    };

    if move_number == current_move {
        if move_number > 0 {
            format!("You are at move #{}{}", move_number, info)
        } else {
            format!("You are at move #{}", move_number)
        }
    } else if move_number > 0 {
        format!("Go to move #{}{}", move_number, info)
    } else {
        "Go to game start".to_string()
    }
}

/// Describes every history entry, oldest first.
#[instrument(skip(history), fields(len = history.len()))]
pub fn describe_moves(history: &[Snapshot], current_move: usize) -> Vec<MoveEntry> {
    history
        .iter()
        .enumerate()
        .map(|(move_number, snapshot)| {
            MoveEntry::new(
                move_number,
                describe_move(snapshot, move_number, current_move),
                move_number != current_move,
            )
        })
        .collect()
}
