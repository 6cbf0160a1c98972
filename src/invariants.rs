//! First-class invariants over the timeline.
//!
//! Invariants are logical properties that must hold after every
//! successful transition. They are checked in debug builds and can
//! be tested independently.

use crate::timeline::Timeline;
use crate::types::{Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// Invariant: the cursor indexes an existing snapshot.
pub struct CursorInRange;

impl Invariant<Timeline> for CursorInRange {
    fn holds(timeline: &Timeline) -> bool {
        timeline.cursor() < timeline.len()
    }

    fn description() -> &'static str {
        "Cursor indexes an existing snapshot"
    }
}

/// Invariant: snapshot 0 is the empty board with no move.
pub struct RootSnapshotEmpty;

impl Invariant<Timeline> for RootSnapshotEmpty {
    fn holds(timeline: &Timeline) -> bool {
        match timeline.snapshot(0) {
            Some(root) => {
                root.last_move().is_none()
                    && root.board().squares().iter().all(|s| *s == Square::Empty)
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "Root snapshot is the empty board with no move"
    }
}

/// Invariant: marks alternate strictly by snapshot parity.
///
/// X produces the odd-indexed snapshots (moving at even cursors),
/// O the even-indexed ones.
pub struct AlternatingMarks;

impl Invariant<Timeline> for AlternatingMarks {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().iter().enumerate().skip(1).all(|(k, snapshot)| {
            let expected = if (k - 1) % 2 == 0 { Player::X } else { Player::O };
            snapshot.last_move().is_some_and(|mov| mov.player() == expected)
        })
    }

    fn description() -> &'static str {
        "Marks alternate strictly by snapshot parity"
    }
}

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// The differing square goes from empty to the mark recorded in the
/// later snapshot's move, at that move's position.
pub struct SingleSquareDelta;

impl Invariant<Timeline> for SingleSquareDelta {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(mov) = next.last_move() else {
                return false;
            };

            let changed = prev
                .board()
                .squares()
                .iter()
                .zip(next.board().squares())
                .filter(|(a, b)| a != b)
                .count();

            changed == 1
                && prev.board().is_empty(mov.position())
                && next.board().get(mov.position()) == Square::Occupied(mov.player())
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly one newly placed square"
    }
}

/// Checks all timeline invariants, collecting every violation.
pub fn check_all(timeline: &Timeline) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    fn record<I: Invariant<Timeline>>(timeline: &Timeline, violations: &mut Vec<InvariantViolation>) {
        if !I::holds(timeline) {
            warn!(invariant = I::description(), "invariant violated");
            violations.push(InvariantViolation {
                description: I::description().to_string(),
            });
        }
    }

    record::<CursorInRange>(timeline, &mut violations);
    record::<RootSnapshotEmpty>(timeline, &mut violations);
    record::<AlternatingMarks>(timeline, &mut violations);
    record::<SingleSquareDelta>(timeline, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Asserts all invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(timeline: &Timeline) {
    debug_assert!(
        check_all(timeline).is_ok(),
        "timeline invariant violated after transition"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::position::Position;

    fn played(moves: &[Position]) -> Timeline {
        let mut timeline = Timeline::new();
        for pos in moves {
            timeline.apply_move(*pos).unwrap();
        }
        timeline
    }

    #[test]
    fn test_fresh_timeline_holds() {
        let timeline = Timeline::new();
        assert!(check_all(&timeline).is_ok());
    }

    #[test]
    fn test_played_timeline_holds() {
        let timeline = played(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
        ]);
        assert!(check_all(&timeline).is_ok());
    }

    #[test]
    fn test_holds_after_time_travel() {
        let mut timeline = played(&[Position::TopLeft, Position::Center, Position::TopRight]);
        timeline.jump_to(1).unwrap();
        timeline.apply_move(Position::BottomLeft).unwrap();
        assert!(check_all(&timeline).is_ok());
    }

    #[test]
    fn test_cursor_out_of_range_violates() {
        let mut timeline = Timeline::new();
        timeline.cursor = 3;
        assert!(!CursorInRange::holds(&timeline));
    }

    #[test]
    fn test_corrupted_board_violates_delta() {
        let mut timeline = played(&[Position::Center]);
        // Fill an extra square without a matching history entry.
        timeline.snapshots[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!SingleSquareDelta::holds(&timeline));
        assert!(check_all(&timeline).is_err());
    }

    #[test]
    fn test_wrong_parity_violates_alternation() {
        let mut timeline = played(&[Position::Center]);
        timeline.snapshots[1].last_move = Some(Move::new(Player::O, Position::Center));
        assert!(!AlternatingMarks::holds(&timeline));
    }

    #[test]
    fn test_dirty_root_violates() {
        let mut timeline = Timeline::new();
        timeline.snapshots[0]
            .board
            .set(Position::Center, Square::Occupied(Player::X));
        assert!(!RootSnapshotEmpty::holds(&timeline));
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let descriptions = [
            CursorInRange::description(),
            RootSnapshotEmpty::description(),
            AlternatingMarks::description(),
            SingleSquareDelta::description(),
        ];
        for (i, a) in descriptions.iter().enumerate() {
            for b in &descriptions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
