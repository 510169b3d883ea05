//! Win and draw detection for tic-tac-toe.

use crate::position::Position;

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Both win detection and the move selector scan this catalog in order, and
/// the scan order is part of the contract: if a board somehow holds more than
/// one complete line, the first match here is the one reported. That
/// tie-break is deterministic by construction, not a strategic choice.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];
