//! Errors that end a session early.

use crate::console::ConsoleError;
use derive_more::{Display, Error, From};
use three_in_a_row_core::GameOver;

/// Failure while running a session.
///
/// Bad player input never shows up here; it is answered with a message
/// and a fresh prompt.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("{}", _0)]
    Console(ConsoleError),
    /// A move reached a game that had already finished.
    #[display("{}", _0)]
    Game(GameOver),
}
