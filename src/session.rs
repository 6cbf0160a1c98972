//! Interactive session surface.
//!
//! A [`GameSession`] owns one timeline and consumes user actions:
//! cell clicks, jump requests, and the cosmetic move-list order
//! toggle. Invalid actions are silent no-ops - the session logs them
//! at debug level and retains prior state unchanged.

use crate::position::Position;
use crate::timeline::Timeline;
use crate::types::{Board, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the rendered move list.
///
/// Cosmetic only: toggling never touches timeline semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One entry in the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub index: usize,
    /// Human-readable label.
    pub label: String,
}

/// A single interactive game session.
///
/// A fresh session always starts with the single-element timeline
/// and cursor 0; there is no persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    timeline: Timeline,
    order: MoveOrder,
}

impl GameSession {
    /// Creates a new session with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The board at the current cursor.
    pub fn board(&self) -> &Board {
        self.timeline.board()
    }

    /// Current move-list display order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Handles a cell click: applies the move for the side to move.
    ///
    /// Clicks on occupied squares or after the game is decided are
    /// ignored.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) {
        if let Err(error) = self.timeline.apply_move(position) {
            debug!(%error, "click ignored");
        }
    }

    /// Handles a jump request: moves the cursor to `index`.
    ///
    /// Out-of-range requests are ignored.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) {
        if let Err(error) = self.timeline.jump_to(index) {
            debug!(%error, "jump ignored");
        }
    }

    /// Reverses the display order of the move list.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// Status line for the board at the cursor.
    pub fn status(&self) -> String {
        match self.timeline.outcome() {
            Outcome::InProgress => format!("Next turn: {}.", self.timeline.to_move()),
            Outcome::Won(player) => format!("Winner: {}!", player),
            Outcome::Draw => "No win possible. :(".to_string(),
        }
    }

    /// Move-list entries for every snapshot, in the selected order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.timeline.len())
            .map(|index| MoveEntry {
                index,
                label: self
                    .timeline
                    .describe_move(index)
                    .unwrap_or_default(),
            })
            .collect();
        if self.order == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Emits the full history at debug level, one row per snapshot.
    ///
    /// Optional observability hook; never part of the game contract.
    pub fn trace_history(&self) {
        debug!(
            cursor = self.timeline.cursor(),
            status = %self.status(),
            history = %self.render_history(),
            "session state"
        );
    }

    fn render_history(&self) -> String {
        use crate::types::Square;

        let mut out = String::new();
        for (turn, snapshot) in self.timeline.snapshots().iter().enumerate() {
            let squares = snapshot
                .board()
                .squares()
                .iter()
                .map(|square| match square {
                    Square::Empty => "_".to_string(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",");
            let last = match snapshot.last_move() {
                Some(mov) => mov.to_string(),
                None => "none".to_string(),
            };
            out.push_str(&format!("Turn {}: {} last move: {}\n", turn, squares, last));
        }
        out
    }
}
