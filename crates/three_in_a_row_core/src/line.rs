//! The eight winning lines of the board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Orientation of a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Horizontal line.
    #[display("row")]
    Row,
    /// Vertical line.
    #[display("column")]
    Column,
    /// Corner-to-corner line through the center.
    #[display("diagonal")]
    Diagonal,
}

/// Three positions that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    positions: [Position; 3],
}

impl Line {
    /// Rows, top to bottom.
    pub const ROWS: [Line; 3] = [
        Line::row([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line::row([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line::row([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    ];

    /// Columns, left to right.
    pub const COLUMNS: [Line; 3] = [
        Line::column([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line::column([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line::column([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    ];

    /// Diagonals: top-left to bottom-right, then top-right to bottom-left.
    pub const DIAGONALS: [Line; 2] = [
        Line::diagonal([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line::diagonal([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// All 8 lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::ROWS[0],
        Line::ROWS[1],
        Line::ROWS[2],
        Line::COLUMNS[0],
        Line::COLUMNS[1],
        Line::COLUMNS[2],
        Line::DIAGONALS[0],
        Line::DIAGONALS[1],
    ];

    const fn row(positions: [Position; 3]) -> Self {
        Self {
            kind: LineKind::Row,
            positions,
        }
    }

    const fn column(positions: [Position; 3]) -> Self {
        Self {
            kind: LineKind::Column,
            positions,
        }
    }

    const fn diagonal(positions: [Position; 3]) -> Self {
        Self {
            kind: LineKind::Diagonal,
            positions,
        }
    }

    /// Returns the orientation of this line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the three positions along this line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Returns the board indices (0-8) along this line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::index)
    }

    /// Returns true if `position` lies on this line.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_eight_lines_of_three_distinct_indices() {
        assert_eq!(Line::ALL.len(), 8);
        for line in Line::ALL {
            let distinct: HashSet<usize> = line.indices().into_iter().collect();
            assert_eq!(distinct.len(), 3);
        }
    }

    #[test]
    fn test_line_geometry() {
        let indices: Vec<[usize; 3]> = Line::ALL.iter().map(Line::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_every_position_covered() {
        for position in Position::ALL {
            let through = Line::ALL.iter().filter(|line| line.contains(position)).count();
            let expected = match position {
                Position::Center => 4,
                Position::TopLeft
                | Position::TopRight
                | Position::BottomLeft
                | Position::BottomRight => 3,
                _ => 2,
            };
            assert_eq!(through, expected, "lines through {}", position);
        }
    }

    #[test]
    fn test_kinds() {
        assert!(Line::ROWS.iter().all(|line| line.kind() == LineKind::Row));
        assert!(Line::COLUMNS.iter().all(|line| line.kind() == LineKind::Column));
        assert!(Line::DIAGONALS.iter().all(|line| line.kind() == LineKind::Diagonal));
    }
}
