//! Win detection logic for tic-tac-toe.

use crate::{Board, Line, Player, Square};
use tracing::instrument;

/// Returns true if any of the eight lines holds three equal squares.
///
/// Empty squares carry distinct labels, so three equal squares are
/// always three marks of the same player.
#[instrument(skip(board))]
pub fn has_winner(board: &Board) -> bool {
    Line::ALL.iter().any(|line| {
        let [a, b, c] = board.triplet(*line);
        a == b && b == c
    })
}

/// Returns the first completed line and the player holding it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::ALL.into_iter().find_map(|line| match board.triplet(line) {
        [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)] if a == b && b == c => {
            Some((line, a))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
