//! Two-player tic-tac-toe at the terminal.
//!
//! # Architecture
//!
//! - **Core** (`three_in_a_row_core`): board, move validation, win and
//!   draw rules
//! - **Console**: the line-reading and line-writing seam
//! - **Screen**: turns game events into text using [`Messages`]
//! - **Controller**: the session and turn loop
//!
//! # Example
//!
//! ```no_run
//! use three_in_a_row::{Messages, Screen, StdConsole, run_session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut screen = Screen::new(StdConsole::stdio(), Messages::default());
//! let end = run_session(&mut screen)?;
//! println!("{:?}", end);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod controller;
mod error;
mod messages;
mod screen;

// Crate-level exports - Console
pub use console::{Console, ConsoleError, StdConsole};

// Crate-level exports - Controller
pub use controller::{SessionEnd, play_game, ready_to_play, request_move, run_session};

// Crate-level exports - Errors
pub use error::SessionError;

// Crate-level exports - Messages
pub use messages::{ConfigError, Messages};

// Crate-level exports - Screen
pub use screen::Screen;

// Crate-level exports - Game types
pub use three_in_a_row_core::{
    Board, Game, GameStatus, Line, Move, MoveError, Outcome, Player, Position, Prompted, Square,
};
