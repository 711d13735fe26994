//! Rejection and error types for the game controller.

use crate::Position;
use crate::invariants::InvariantViolation;

/// Why a cell click produced no move.
///
/// The interactive surface ignores these silently; they exist so the
/// reason can be logged and tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ClickRejected {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// A winner has already been decided on this board.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for ClickRejected {}

/// Error returned when jumping to a move outside the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// Requested move index is past the end of the history.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    OutOfRange {
        /// The move index asked for.
        requested: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Error returned when a recorded history breaks the history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid history: {}", join_descriptions(violations))]
pub struct InvalidHistory {
    /// Every invariant the history violates.
    pub violations: Vec<InvariantViolation>,
}

impl InvalidHistory {
    /// Wraps the violations reported by an invariant check.
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        Self { violations }
    }
}

impl std::error::Error for InvalidHistory {}

fn join_descriptions(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
