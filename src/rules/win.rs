//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Checks if there is a winner on the board.
///
/// Scans the 8 winning lines in canonical order (rows, columns,
/// diagonals) and returns `Some(player)` for the first completed
/// line. In a valid game at most one line can be complete.
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(positions: &[Position], player: Player) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_each_row() {
        for row in [
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        ] {
            let board = board_with(&row, Player::X);
            assert_eq!(check_winner(&board), Some(Player::X));
        }
    }

    #[test]
    fn test_winner_each_column() {
        for col in [
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
        ] {
            let board = board_with(&col, Player::O);
            assert_eq!(check_winner(&board), Some(Player::O));
        }
    }

    #[test]
    fn test_winner_diagonals() {
        let board = board_with(
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(check_winner(&board), Some(Player::O));

        let board = board_with(
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::X,
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = board_with(&[Position::TopLeft, Position::TopCenter], Player::X);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }
}
