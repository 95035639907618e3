//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They always inspect the
//! whole board, not just the lines through the last move.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_winner, winner, winning_line};
