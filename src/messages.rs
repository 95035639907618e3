//! User-facing text, loaded from defaults or a TOML file.
//!
//! Templates use positional `{}` placeholders filled by [`Messages::fill`].

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

const BANNER: &str = "
~~~~~~~~~~~~~~~~~~~~~~~~
      TIC-TAC-TOE:
    *Three in a Row*

     Est. 1300 B.C.
~~~~~~~~~~~~~~~~~~~~~~~~
";

const INSTRUCTIONS: &str = "\
Instructions:
  1. Decide who will be {} and who will be {}. {} always goes first.
  2. When it's your turn, enter the move you want to make. If you get three in
     a row, you win!
  3. Enter 'quit' or 'q' at any time to quit the game.
";

const BOARD: &str = "
   {} | {} | {}
  -----------
   {} | {} | {}
  -----------
   {} | {} | {}
";

/// Every message the game prints.
///
/// Missing keys in a messages file keep their default text.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_", into)]
pub struct Messages {
    /// Banner shown at startup.
    banner: String,
    /// Instructions; placeholders are first player, second player, first player.
    instructions: String,
    /// Board layout; nine placeholders in row-major order.
    board: String,
    /// Ready prompt.
    ready: String,
    /// Hint after an unrecognised ready answer.
    y_or_n: String,
    /// Shown when the game begins.
    start: String,
    /// Move prompt; placeholder is the player's symbol.
    prompt_move: String,
    /// Shown for a move that is not a number 1-9.
    invalid_move: String,
    /// Shown for a move onto an occupied square.
    space_taken: String,
    /// Winner announcement; placeholder is the player's symbol.
    winner: String,
    /// Draw announcement.
    draw: String,
    /// Shown when leaving.
    goodbye: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            banner: BANNER.to_string(),
            instructions: INSTRUCTIONS.to_string(),
            board: BOARD.to_string(),
            ready: "Are you ready to play tic-tac-toe? (y/n) ".to_string(),
            y_or_n: "Please enter y or n.".to_string(),
            start: "LET THE GAME BEGIN!".to_string(),
            prompt_move: "Player {}, enter your move (1-9): ".to_string(),
            invalid_move: "You must enter a number between 1 and 9.".to_string(),
            space_taken: "That space is taken!".to_string(),
            winner: "Player {} wins!".to_string(),
            draw: "The game is a draw. No one wins!".to_string(),
            goodbye: "Goodbye.".to_string(),
        }
    }
}

impl Messages {
    /// Loads messages from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading messages from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read messages file: {}", e))
        })?;

        let messages = Self::from_toml(&content)?;
        info!("Messages loaded successfully");
        Ok(messages)
    }

    /// Parses messages from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse messages: {}", e)))
    }

    /// Replaces each `{}` in `template` with the next argument.
    ///
    /// Placeholders beyond the supplied arguments are left as written.
    pub fn fill<T: std::fmt::Display>(template: &str, args: &[T]) -> String {
        let mut pieces = template.split("{}");
        let mut result = pieces.next().unwrap_or_default().to_string();
        let mut args = args.iter();
        for piece in pieces {
            match args.next() {
                Some(arg) => result.push_str(&arg.to_string()),
                None => result.push_str("{}"),
            }
            result.push_str(piece);
        }
        result
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_in_order() {
        assert_eq!(Messages::fill("Player {} wins!", &['X']), "Player X wins!");
        assert_eq!(Messages::fill("{}-{}-{}", &[1, 2, 3]), "1-2-3");
    }

    #[test]
    fn test_fill_leaves_extra_placeholders() {
        assert_eq!(Messages::fill("{} and {}", &["a"]), "a and {}");
        assert_eq!(Messages::fill("no placeholders", &["a"]), "no placeholders");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let messages = Messages::from_toml("goodbye = \"Adieu.\"\n").expect("valid toml");
        assert_eq!(messages.goodbye(), "Adieu.");
        assert_eq!(messages.draw(), Messages::default().draw());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let error = Messages::from_toml("goodbye = ").expect_err("invalid toml");
        assert!(error.message.starts_with("Failed to parse messages"));
    }

    #[test]
    fn test_setters() {
        let messages = Messages::default().with_winner("{} takes it");
        assert_eq!(messages.winner(), "{} takes it");
    }
}
