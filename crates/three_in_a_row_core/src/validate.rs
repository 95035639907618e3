//! Turning raw player text into moves and answers.
//!
//! Every failure here is recoverable: the caller shows a message and asks
//! the same player again. Quitting is not an error but a [`Prompted`]
//! outcome that callers pass upward.

use super::position::Position;
use super::types::Board;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Inputs that end the program at any prompt.
pub const QUIT_SENTINELS: [&str; 2] = ["quit", "q"];

/// Outcome of reading from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompted<T> {
    /// The player answered; carry on with the value.
    Continue(T),
    /// The player asked to leave.
    QuitRequested,
}

impl<T> Prompted<T> {
    /// Maps the carried value, leaving a quit request untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Prompted::Continue(value) => Prompted::Continue(f(value)),
            Prompted::QuitRequested => Prompted::QuitRequested,
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Input is not made of decimal digits.
    #[display("move must be a whole number")]
    InvalidMoveFormat,
    /// Number is outside 1-9.
    #[display("move must be between 1 and 9")]
    InvalidMoveRange,
    /// The square already holds a mark.
    #[display("square {} is already taken", _0)]
    SpaceTaken(#[error(not(source))] Position),
}

/// Why an answer to the ready prompt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ReadyError {
    /// Answer was not y, n or a quit sentinel.
    #[display("answer must be y or n")]
    YesOrNo,
}

fn strip_line_ending(raw: &str) -> &str {
    raw.trim_end_matches(['\n', '\r'])
}

/// Validates a move typed by the current player.
///
/// The quit check is an exact match on `quit` or `q`. Otherwise the text
/// must be all ASCII digits naming a free square 1-9.
///
/// # Errors
///
/// Returns [`MoveError`] when the text is not a number, is out of range, or
/// names an occupied square. The board is never modified.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, raw: &str) -> Result<Prompted<Position>, MoveError> {
    let input = strip_line_ending(raw);

    if QUIT_SENTINELS.contains(&input) {
        debug!("Quit requested at move prompt");
        return Ok(Prompted::QuitRequested);
    }

    if input.is_empty() || !input.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(MoveError::InvalidMoveFormat);
    }

    // All digits: a parse failure can only be overflow.
    let number = input
        .parse::<usize>()
        .map_err(|_| MoveError::InvalidMoveRange)?;
    let position = Position::from_number(number).ok_or(MoveError::InvalidMoveRange)?;

    if !board.is_free(position) {
        return Err(MoveError::SpaceTaken(position));
    }

    debug!(position = %position, index = position.index(), "Move accepted");
    Ok(Prompted::Continue(position))
}

/// Parses the answer to "are you ready to play?".
///
/// Matching is case-insensitive: `y` and `n` answer the question, `quit`
/// and `q` leave.
///
/// # Errors
///
/// Returns [`ReadyError::YesOrNo`] for anything else.
#[instrument]
pub fn parse_ready(raw: &str) -> Result<Prompted<bool>, ReadyError> {
    let answer = strip_line_ending(raw).to_lowercase();
    match answer.as_str() {
        "y" => Ok(Prompted::Continue(true)),
        "n" => Ok(Prompted::Continue(false)),
        other if QUIT_SENTINELS.contains(&other) => Ok(Prompted::QuitRequested),
        _ => Err(ReadyError::YesOrNo),
    }
}
