//! Evaluation rules: win detection, draw detection, board status.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Outcome};

/// Evaluates a board: winner, draw, or still in progress.
///
/// Draw policy: a board is a draw only when it is full and has no
/// winning line. Boards that are dead but not yet full still report
/// `InProgress`; a weaker line-based reduction that tries to catch
/// those early misclassifies some positions and is deliberately not
/// used here.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Won(winner);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
