//! The session and turn loop.
//!
//! A session runs banner → ready prompt → game. A game runs
//! setup → moves until won or drawn → announcement. Quitting at any prompt
//! comes back as [`Prompted::QuitRequested`] and is passed straight up;
//! nothing here exits the process.

use crate::console::Console;
use crate::error::SessionError;
use crate::screen::Screen;
use three_in_a_row_core::{Game, Outcome, Position, Prompted, parse_ready, validate_move};
use tracing::{debug, info, instrument};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A game was played to the end.
    Finished(Outcome),
    /// The players answered no to the ready prompt.
    Declined,
    /// A player quit.
    Quit,
}

/// Runs a whole session: introduction, ready prompt and one game.
///
/// The goodbye message is shown on [`SessionEnd::Declined`] and
/// [`SessionEnd::Quit`].
#[instrument(skip(screen))]
pub fn run_session<C: Console>(screen: &mut Screen<C>) -> Result<SessionEnd, SessionError> {
    screen.show_banner()?;
    screen.show_instructions()?;

    let end = match ready_to_play(screen)? {
        Prompted::QuitRequested => SessionEnd::Quit,
        Prompted::Continue(false) => SessionEnd::Declined,
        Prompted::Continue(true) => {
            screen.show_start()?;
            match play_game(screen)? {
                Prompted::Continue(outcome) => SessionEnd::Finished(outcome),
                Prompted::QuitRequested => SessionEnd::Quit,
            }
        }
    };

    if !matches!(end, SessionEnd::Finished(_)) {
        screen.say_goodbye()?;
    }
    info!(?end, "Session ended");
    Ok(end)
}

/// Asks until the players answer y, n or quit.
///
/// End of input counts as quitting.
#[instrument(skip(screen))]
pub fn ready_to_play<C: Console>(screen: &mut Screen<C>) -> Result<Prompted<bool>, SessionError> {
    loop {
        let Some(answer) = screen.ask_ready()? else {
            return Ok(Prompted::QuitRequested);
        };
        match parse_ready(&answer) {
            Ok(prompted) => return Ok(prompted),
            Err(e) => {
                debug!(error = %e, %answer, "Unrecognised ready answer");
                screen.hint_yes_or_no()?;
            }
        }
    }
}

/// Asks the current player until they give a legal move or quit.
///
/// Rejected moves are explained and the same player is asked again.
#[instrument(skip(screen, game), fields(player = %game.current_player()))]
pub fn request_move<C: Console>(
    screen: &mut Screen<C>,
    game: &Game,
) -> Result<Prompted<Position>, SessionError> {
    let player = game.current_player();
    loop {
        let Some(input) = screen.ask_move(player)? else {
            return Ok(Prompted::QuitRequested);
        };
        match validate_move(game.board(), &input) {
            Ok(prompted) => return Ok(prompted),
            Err(e) => {
                debug!(error = %e, %input, "Move rejected");
                screen.show_move_error(&e)?;
            }
        }
    }
}

/// Plays one game from an empty board to a win or draw.
///
/// The board is shown before the first move and after every accepted move.
#[instrument(skip(screen))]
pub fn play_game<C: Console>(screen: &mut Screen<C>) -> Result<Prompted<Outcome>, SessionError> {
    let mut game = Game::new();
    screen.show_board(game.board())?;

    loop {
        let position = match request_move(screen, &game)? {
            Prompted::Continue(position) => position,
            Prompted::QuitRequested => {
                info!(move_count = game.move_count(), "Game abandoned");
                return Ok(Prompted::QuitRequested);
            }
        };

        game.apply(position)?;
        screen.show_board(game.board())?;

        if let Some(outcome) = game.outcome() {
            info!(%outcome, move_count = game.move_count(), "Game finished");
            screen.announce(outcome)?;
            return Ok(Prompted::Continue(outcome));
        }
    }
}
