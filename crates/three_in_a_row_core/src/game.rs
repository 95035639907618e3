//! Game state: whose turn it is, which moves were made, and how it ended.

use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended with a full board and no winner.
    Drawn,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A move was applied after the game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Game is already over")]
pub struct GameOver;

/// Tic-tac-toe game engine.
///
/// Owns the board exclusively. Moves reaching [`Game::apply`] must already
/// be validated against the board (see [`crate::validate_move`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    status: GameStatus,
}

impl Game {
    /// Creates a new game on a freshly labelled board.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Board::new();
        board.reset();
        Self {
            board,
            history: Vec::with_capacity(9),
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns how many moves have been played.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move, by move-count parity.
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.move_count())
    }

    /// Returns the outcome once the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Drawn => Some(Outcome::Draw),
        }
    }

    /// Places the current player's mark at `position` and updates the status.
    ///
    /// The player who just moved wins if any line is complete; otherwise the
    /// ninth move draws.
    ///
    /// # Errors
    ///
    /// Returns [`GameOver`] if the game has already finished.
    #[instrument(skip(self), fields(player = %self.current_player(), move_count = self.move_count()))]
    pub fn apply(&mut self, position: Position) -> Result<GameStatus, GameOver> {
        if self.status != GameStatus::InProgress {
            return Err(GameOver);
        }

        let player = self.current_player();
        let mv = Move::new(player, position);
        self.board.place(position, player);
        self.history.push(mv);
        debug!(%mv, board = %self.board, "Mark placed");

        if let Some((line, winner)) = rules::winning_line(&self.board) {
            debug_assert_eq!(winner, player);
            info!(winner = %player, line = %line.kind(), "Game won");
            self.status = GameStatus::Won(player);
        } else if self.move_count() == self.board.squares().len() {
            info!("Game drawn");
            self.status = GameStatus::Drawn;
        }

        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, numbers: &[usize]) -> GameStatus {
        let mut status = game.status();
        for number in numbers {
            let position = Position::from_number(*number).expect("valid number");
            status = game.apply(position).expect("game in progress");
        }
        status
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_players_alternate() {
        let mut game = Game::new();
        play(&mut game, &[5]);
        assert_eq!(game.current_player(), Player::O);
        play(&mut game, &[1]);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(
            game.history(),
            &[
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
    }

    #[test]
    fn test_mover_wins_top_row() {
        let mut game = Game::new();
        let status = play(&mut game, &[1, 4, 2, 5, 3]);
        assert_eq!(status, GameStatus::Won(Player::X));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_draw_after_ninth_move() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        let status = play(&mut game, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        assert_eq!(status, GameStatus::Drawn);
        let outcome = game.outcome().expect("finished");
        assert!(outcome.is_draw());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_win_on_ninth_move_is_not_draw() {
        let mut game = Game::new();
        // X O X / O X O / O X X : X completes the main diagonal last
        let status = play(&mut game, &[1, 2, 3, 4, 5, 6, 8, 7, 9]);
        assert_eq!(status, GameStatus::Won(Player::X));
    }

    #[test]
    fn test_move_and_outcome_display() {
        let mut game = Game::new();
        play(&mut game, &[1, 4, 2, 5, 3]);
        assert_eq!(game.history()[1].to_string(), "O -> Middle-left");
        assert_eq!(
            game.outcome().map(|outcome| outcome.to_string()),
            Some("Player X wins".to_string())
        );
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_apply_after_finish_fails() {
        let mut game = Game::new();
        play(&mut game, &[1, 4, 2, 5, 3]);
        assert_eq!(game.apply(Position::BottomRight), Err(GameOver));
        assert_eq!(game.move_count(), 5);
    }
}
