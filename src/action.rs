//! First-class action types.
//!
//! Moves are domain events, not side effects. Each snapshot in a
//! timeline stores the move that produced it, so a game can be
//! described, replayed, and logged move by move.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move or jumping the cursor.
///
/// The session surface treats all of these as silent no-ops; the
/// timeline itself reports them so callers can tell why nothing
/// changed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the cursor is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The jump target is outside the timeline.
    #[display("Cursor {target} out of range (timeline length {len})")]
    CursorOutOfRange {
        /// Requested cursor value.
        target: usize,
        /// Number of snapshots in the timeline.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
