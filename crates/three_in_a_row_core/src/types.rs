//! Core domain types for tic-tac-toe.

use super::line::Line;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Returns the player whose turn it is after `move_count` moves.
    ///
    /// X moves on even counts, O on odd counts.
    pub fn for_turn(move_count: usize) -> Self {
        if move_count % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square, labelled with its 1-based position number.
    Empty(u8),
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if no player has marked this square.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty(_))
    }

    /// Returns the player occupying this square, if any.
    pub fn occupant(&self) -> Option<Player> {
        match self {
            Square::Empty(_) => None,
            Square::Occupied(player) => Some(*player),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty(label) => write!(f, "{}", label),
            Square::Occupied(player) => write!(f, "{}", player.symbol()),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board never rejects a write: legality is checked before
/// [`Board::place`] is called (see [`crate::validate_move`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a board with every square labelled 1-9.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: std::array::from_fn(|index| Square::Empty(index as u8 + 1)),
        }
    }

    /// Restores every square to its positional label.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for position in Position::ALL {
            self.squares[position.index()] = Square::Empty(position.number());
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// Returns true if the square still carries its positional label.
    pub fn is_free(&self, position: Position) -> bool {
        self.get(position) == Square::Empty(position.number())
    }

    /// Marks the square at `position` for `player`, overwriting whatever is there.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, player: Player) {
        self.squares[position.index()] = Square::Occupied(player);
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the positions that can still be played.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|position| self.is_free(*position))
            .collect()
    }

    /// Returns the three squares along `line`.
    pub fn triplet(&self, line: Line) -> [Square; 3] {
        line.positions().map(|position| self.get(position))
    }

    /// Returns the three rows, top to bottom.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        Line::ROWS.map(|line| self.triplet(line))
    }

    /// Returns the three columns, left to right.
    pub fn columns(&self) -> [[Square; 3]; 3] {
        Line::COLUMNS.map(|line| self.triplet(line))
    }

    /// Returns the two diagonals: top-left to bottom-right, then top-right to bottom-left.
    pub fn diagonals(&self) -> [[Square; 3]; 2] {
        Line::DIAGONALS.map(|line| self.triplet(line))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.rows().iter().enumerate() {
            write!(f, "{}|{}|{}", row[0], row[1], row[2])?;
            if row_index < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_labelled() {
        let board = Board::new();
        for (index, square) in board.squares().iter().enumerate() {
            assert_eq!(*square, Square::Empty(index as u8 + 1));
        }
    }

    #[test]
    fn test_place_marks_only_target() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);

        assert!(!board.is_free(Position::Center));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.free_positions().len(), 8);
    }

    #[test]
    fn test_place_overwrites_without_check() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopLeft, Player::O);
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::BottomRight, Player::O);

        board.reset();
        let once = board.clone();
        board.reset();

        assert_eq!(board, once);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_free_tracks_places_since_reset() {
        let mut board = Board::new();
        let played = [Position::TopRight, Position::Center, Position::BottomLeft];
        for position in played {
            board.place(position, Player::O);
        }

        for position in Position::ALL {
            assert_eq!(board.is_free(position), !played.contains(&position));
        }

        board.reset();
        assert!(Position::ALL.iter().all(|position| board.is_free(*position)));
    }

    #[test]
    fn test_rows_columns_diagonals() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);

        assert_eq!(
            board.rows()[0],
            [Square::Occupied(Player::X), Square::Empty(2), Square::Empty(3)]
        );
        assert_eq!(
            board.columns()[2],
            [Square::Empty(3), Square::Empty(6), Square::Empty(9)]
        );
        assert_eq!(
            board.diagonals()[1],
            [Square::Empty(3), Square::Empty(5), Square::Empty(7)]
        );
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.place(Position::Center, Player::O);
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_for_turn() {
        assert_eq!(Player::for_turn(0), Player::X);
        assert_eq!(Player::for_turn(1), Player::O);
        assert_eq!(Player::for_turn(8), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
    }
}
