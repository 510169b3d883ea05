//! Game engine: validated moves, turn alternation, and status tracking.

use crate::action::{Move, MoveError};
use crate::ai;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board for the lifetime of a game and is the single place where
/// it is mutated: human moves go through [`Game::make_move`] (validated) and
/// bot moves through [`Game::auto_move`] (delegated to the move selector).
/// After every move the status is refreshed from the win and draw rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Makes a move for the player to move at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game already ended and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.record(Move::new(player, pos));
        Ok(())
    }

    /// Lets the rule-based bot take the current turn.
    ///
    /// The move selector picks and marks the square directly on the engine's
    /// board; the engine then records the move and refreshes the status.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game already ended. On an
    /// in-progress board the selector always finds a square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn auto_move(&mut self) -> Result<Move, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        let pos = ai::select_move(&mut self.board, player).ok_or(MoveError::GameOver)?;
        let mov = Move::new(player, pos);
        self.record(mov);
        Ok(mov)
    }

    /// Pushes the move to the history, passes the turn, and updates status.
    fn record(&mut self, mov: Move) {
        self.history.push(mov);
        self.to_move = mov.player.opponent();
        self.update_status();
        debug!(%mov, status = ?self.status, "move recorded");
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
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

    #[test]
    fn test_make_move_alternates_turn() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_win_updates_status() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,     // X
            Position::MiddleLeft,  // O
            Position::TopCenter,   // X
            Position::Center,      // O
            Position::TopRight,    // X wins the top row
        ] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(
            game.make_move(Position::BottomLeft),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_auto_move_rejected_after_game_over() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(game.auto_move(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_auto_move_blocks_threat() {
        let mut game = Game::starting_with(Player::O);
        game.make_move(Position::TopLeft).unwrap(); // O
        game.make_move(Position::Center).unwrap(); // X (bot would, but by hand)
        game.make_move(Position::TopCenter).unwrap(); // O threatens top row
        let mov = game.auto_move().unwrap(); // X must block
        assert_eq!(mov, Move::new(Player::X, Position::TopRight));
        assert_eq!(
            game.board().get(Position::TopRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
