//! Draw detection logic for tic-tac-toe.

use super::win::has_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| !square.is_empty())
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_winner(board)
}

/// Counts the squares still carrying their label.
pub fn empty_count(board: &Board) -> usize {
    board
        .squares()
        .iter()
        .filter(|square| matches!(square, Square::Empty(_)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_with(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (position, player) in Position::ALL.into_iter().zip(marks) {
            board.place(position, player);
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert_eq!(empty_count(&board), 9);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);
        assert!(!is_full(&board));
        assert_eq!(empty_count(&board), 8);
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = board_with([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / O X O
        let board = board_with([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
