//! Rendering the game through a [`Console`].

use crate::console::{Console, ConsoleError};
use crate::messages::Messages;
use three_in_a_row_core::{Board, MoveError, Outcome, Player};
use tracing::instrument;

/// Everything the game shows or asks, worded by [`Messages`].
#[derive(Debug)]
pub struct Screen<C> {
    console: C,
    messages: Messages,
}

impl<C: Console> Screen<C> {
    /// Creates a screen writing `messages` to `console`.
    pub fn new(console: C, messages: Messages) -> Self {
        Self { console, messages }
    }

    /// Consumes the screen, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Shows the startup banner.
    pub fn show_banner(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line(self.messages.banner())
    }

    /// Shows the instructions, naming who plays first.
    pub fn show_instructions(&mut self) -> Result<(), ConsoleError> {
        let first = Player::for_turn(0);
        let text = Messages::fill(
            self.messages.instructions(),
            &[first, first.opponent(), first],
        );
        self.console.write_line(&text)
    }

    /// Asks whether the players are ready.
    pub fn ask_ready(&mut self) -> Result<Option<String>, ConsoleError> {
        self.console.read_line(self.messages.ready())
    }

    /// Reminds the player to answer y or n.
    pub fn hint_yes_or_no(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line(self.messages.y_or_n())
    }

    /// Announces the start of the game.
    pub fn show_start(&mut self) -> Result<(), ConsoleError> {
        let text = format!("\n{}", self.messages.start());
        self.console.write_line(&text)
    }

    /// Asks `player` for a move.
    #[instrument(skip(self))]
    pub fn ask_move(&mut self, player: Player) -> Result<Option<String>, ConsoleError> {
        let prompt = Messages::fill(self.messages.prompt_move(), &[player]);
        self.console.read_line(&prompt)
    }

    /// Explains why a move was rejected.
    pub fn show_move_error(&mut self, error: &MoveError) -> Result<(), ConsoleError> {
        let text = match error {
            MoveError::InvalidMoveFormat | MoveError::InvalidMoveRange => {
                self.messages.invalid_move()
            }
            MoveError::SpaceTaken(_) => self.messages.space_taken(),
        };
        self.console.write_line(text)
    }

    /// Draws the board: labels for free squares, symbols for marks.
    pub fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        let text = Messages::fill(self.messages.board(), board.squares());
        self.console.write_line(&text)
    }

    /// Announces the winner or the draw.
    pub fn announce(&mut self, outcome: Outcome) -> Result<(), ConsoleError> {
        let text = match outcome {
            Outcome::Winner(player) => Messages::fill(self.messages.winner(), &[player]),
            Outcome::Draw => self.messages.draw().clone(),
        };
        self.console.write_line(&text)
    }

    /// Says goodbye.
    pub fn say_goodbye(&mut self) -> Result<(), ConsoleError> {
        self.console.write_line(self.messages.goodbye())
    }
}
