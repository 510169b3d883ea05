//! Win detection logic for tic-tac-toe.

use super::WINNING_LINES;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. Lines are scanned in [`WINNING_LINES`] order and the
/// first complete line wins.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
