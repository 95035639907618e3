//! Pure tic-tac-toe game logic.
//!
//! This crate knows nothing about terminals or prompts. It provides:
//!
//! - **Board model**: [`Board`], [`Square`], [`Position`] and the eight
//!   winning [`Line`]s
//! - **Move validation**: [`validate_move`] and [`parse_ready`], which turn
//!   raw player text into a [`Prompted`] value or a recoverable error
//! - **Rules**: win and draw detection in [`rules`]
//! - **Game state**: [`Game`], which applies moves and tracks the
//!   [`GameStatus`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod line;
mod position;
pub mod rules;
mod types;
mod validate;

pub use game::{Game, GameOver, GameStatus, Move, Outcome};
pub use line::{Line, LineKind};
pub use position::Position;
pub use types::{Board, Player, Square};
pub use validate::{
    MoveError, Prompted, QUIT_SENTINELS, ReadyError, parse_ready, validate_move,
};
