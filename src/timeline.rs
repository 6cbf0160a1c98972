//! Snapshot history with a movable cursor.
//!
//! A [`Timeline`] is the full record of a game: one [`Snapshot`] per
//! move plus the initial empty board, and a cursor marking the turn
//! currently being viewed and played from. Jumping the cursor back
//! and then making a move discards the abandoned branch.

use crate::action::{Move, MoveError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An immutable board state plus the move that produced it.
///
/// The root snapshot (the empty board) has no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) last_move: Option<Move>,
}

impl Snapshot {
    fn root() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// Ordered snapshot history plus the cursor into it.
///
/// Snapshot 0 is the empty board; snapshot k is the state after k
/// moves. Consecutive snapshots differ in exactly one square, and
/// marks alternate strictly: X places the move into odd-indexed
/// snapshots, O into even-indexed ones. The side to move and the
/// game status are derived (cursor parity, board evaluation) rather
/// than stored, so they cannot drift out of sync with the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) cursor: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::root()],
            cursor: 0,
        }
    }

    /// Number of snapshots (moves made so far + 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a timeline holds at least the root snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot at the given index.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.cursor].board
    }

    /// The side to move at the cursor: X at even cursors, O at odd.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Positions still playable at the cursor.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.board())
    }

    /// Applies a move at the cursor.
    ///
    /// On success, snapshots beyond the cursor are discarded, one new
    /// snapshot is appended with the side to move placed at
    /// `position`, and the cursor advances to the new last index.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the timeline untouched, when the
    /// board at the cursor is already decided or the square is
    /// occupied.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.outcome().is_decided() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mov = Move::new(self.to_move(), position);
        let mut board = self.board().clone();
        board.set(position, Square::Occupied(mov.player()));

        // Branch discard: moving from a past cursor abandons the future.
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot {
            board,
            last_move: Some(mov),
        });
        self.cursor = self.snapshots.len() - 1;

        debug!(cursor = self.cursor, %mov, "applied move");
        invariants::assert_invariants(self);
        Ok(())
    }

    /// Moves the cursor to an arbitrary snapshot.
    ///
    /// History contents are never altered by a jump.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the cursor unchanged, when `target`
    /// is not a valid snapshot index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), MoveError> {
        if target >= self.snapshots.len() {
            return Err(MoveError::CursorOutOfRange {
                target,
                len: self.snapshots.len(),
            });
        }
        debug!(from = self.cursor, to = target, "jumping cursor");
        self.cursor = target;
        Ok(())
    }

    /// Describes the snapshot at `index` for a move list.
    ///
    /// Index 0 is the game start; later indices name the acting
    /// player and the row/col of the move that produced them.
    pub fn describe_move(&self, index: usize) -> Option<String> {
        let snapshot = self.snapshots.get(index)?;
        Some(match snapshot.last_move() {
            None => "Go to game start.".to_string(),
            Some(mov) => format!(
                "Go to move #{}: ({}, {}, {})",
                index,
                mov.player(),
                mov.position().row(),
                mov.position().col()
            ),
        })
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
