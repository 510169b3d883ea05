//! Rule-based move selection.
//!
//! The bot plays a fixed priority policy with no search and no randomness:
//!
//! 1. Win if a line can be completed this turn.
//! 2. Block the opponent's completable line.
//! 3. Take the center.
//! 4. Take the first open corner.
//! 5. Take the first open side.
//!
//! Exactly one rule fires per call, and every scan runs in a fixed order, so
//! the same board always produces the same move.

use crate::position::Position;
use crate::rules::WINNING_LINES;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Corners in preference order.
const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Sides in preference order.
const SIDES: [Position; 4] = [
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Selects a move for `acting` and marks the chosen square.
///
/// Applies the priority policy above and places `acting`'s mark on the
/// chosen square before returning it, so selection and application are a
/// single step from the caller's perspective.
///
/// Returns `None` without touching the board when no square is empty. The
/// caller is expected to rule out terminal boards (via
/// [`crate::rules::check_winner`] and [`crate::rules::is_full`]) before
/// asking for a move; a `None` here is a precondition violation, not a
/// legal move.
#[instrument(skip(board))]
pub fn select_move(board: &mut Board, acting: Player) -> Option<Position> {
    let pos = plan_move(board, acting)?;
    board.set(pos, Square::Occupied(acting));
    debug!(player = %acting, position = %pos, "bot move selected");
    Some(pos)
}

/// Runs the priority policy without mutating the board.
fn plan_move(board: &Board, acting: Player) -> Option<Position> {
    completing_move(board, acting)
        .or_else(|| completing_move(board, acting.opponent()))
        .or_else(|| take_center(board))
        .or_else(|| first_empty(board, &CORNERS))
        .or_else(|| first_empty(board, &SIDES))
}

/// Finds the empty square that would complete a line for `player`.
///
/// Lines are scanned in [`WINNING_LINES`] order; within a line the three
/// two-filled-one-empty cases are checked with the empty square at `c`,
/// then `b`, then `a`. First match wins. Called with the acting player this
/// is the win-now rule; called with the opponent it is the block rule.
fn completing_move(board: &Board, player: Player) -> Option<Position> {
    let mark = Square::Occupied(player);
    for [a, b, c] in WINNING_LINES {
        if board.get(a) == mark && board.get(b) == mark && board.is_empty(c) {
            return Some(c);
        }
        if board.get(a) == mark && board.get(c) == mark && board.is_empty(b) {
            return Some(b);
        }
        if board.get(b) == mark && board.get(c) == mark && board.is_empty(a) {
            return Some(a);
        }
    }
    None
}

fn take_center(board: &Board) -> Option<Position> {
    board.is_empty(Position::Center).then_some(Position::Center)
}

fn first_empty(board: &Board, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().find(|pos| board.is_empty(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[Position], o: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in x {
            board.set(*pos, Square::Occupied(Player::X));
        }
        for pos in o {
            board.set(*pos, Square::Occupied(Player::O));
        }
        board
    }

    #[test]
    fn test_empty_board_takes_center() {
        let mut board = Board::new();
        assert_eq!(select_move(&mut board, Player::X), Some(Position::Center));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_completes_own_line() {
        let mut board = board_with(&[Position::TopLeft, Position::TopCenter], &[]);
        assert_eq!(select_move(&mut board, Player::X), Some(Position::TopRight));
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::X));
    }

    #[test]
    fn test_blocks_opponent_with_own_mark() {
        let mut board = board_with(&[], &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(select_move(&mut board, Player::X), Some(Position::TopRight));
        // The block is filled with the acting mark, not the opponent's.
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::X));
    }

    #[test]
    fn test_win_beats_block() {
        // X can win on the top row; O threatens the bottom row.
        let mut board = board_with(
            &[Position::TopLeft, Position::TopCenter],
            &[Position::BottomLeft, Position::BottomCenter],
        );
        assert_eq!(select_move(&mut board, Player::X), Some(Position::TopRight));
        assert!(board.is_empty(Position::BottomRight));
    }

    #[test]
    fn test_gap_in_middle_of_line() {
        // X on TopLeft and TopRight; the empty square is b in the line scan.
        let mut board = board_with(&[Position::TopLeft, Position::TopRight], &[]);
        assert_eq!(
            select_move(&mut board, Player::X),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_corner_fallback_order() {
        // Center taken, nothing to win or block: first corner in order.
        let mut board = board_with(&[], &[Position::Center]);
        assert_eq!(select_move(&mut board, Player::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_side_fallback_order() {
        // X|O|X / 3|X|5 / O|X|O - center and every corner taken, no line
        // completable by either player. Open squares are the sides at 3 and
        // 5; the side scan runs [1, 3, 5, 7], so 3 (Middle-left) wins.
        let mut board = board_with(
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::BottomCenter,
            ],
            &[
                Position::TopCenter,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );
        assert_eq!(
            select_move(&mut board, Player::X),
            Some(Position::MiddleLeft)
        );
    }

    #[test]
    fn test_full_board_returns_none_without_mutation() {
        // X O X / O X X / O X O - full, drawn.
        let mut board = board_with(
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );
        let before = board.clone();
        assert_eq!(select_move(&mut board, Player::X), None);
        assert_eq!(board, before);
    }
}
