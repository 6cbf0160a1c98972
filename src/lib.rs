//! Tic-tac-toe engine with snapshot history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a 9-square board
//! - **Timeline**: ordered board snapshots with a movable cursor,
//!   supporting "jump to move" and branch discard on time travel
//! - **Session**: the interactive surface - clicks, jumps, status
//!   text, and the rendered move list
//!
//! The side to move and the game status are always derived from the
//! timeline (cursor parity and board evaluation), never stored as
//! separate flags that could fall out of sync.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Outcome, Player, Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.apply_move(Position::TopLeft)?;   // X
//! timeline.apply_move(Position::Center)?;    // O
//! assert_eq!(timeline.to_move(), Player::X);
//!
//! timeline.jump_to(0)?;
//! assert_eq!(timeline.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_timeline::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod invariants;
mod position;
mod rules;
mod session;
mod timeline;
mod types;

// Crate-level exports - Domain events and errors
pub use action::{Move, MoveError};

// Crate-level exports - Invariant checking
pub use invariants::{
    AlternatingMarks, CursorInRange, Invariant, InvariantViolation, RootSnapshotEmpty,
    SingleSquareDelta, check_all,
};

// Crate-level exports - Board positions
pub use position::Position;

// Crate-level exports - Evaluation rules
pub use rules::{check_winner, evaluate, is_full};

// Crate-level exports - Interactive session
pub use session::{GameSession, MoveEntry, MoveOrder};

// Crate-level exports - Snapshot history
pub use timeline::{Snapshot, Timeline};

// Crate-level exports - Core types
pub use types::{Board, Outcome, Player, Square};
