//! Deterministic rule-based tic-tac-toe.
//!
//! The crate has two tightly coupled core pieces and a thin engine around
//! them:
//!
//! - **Rules** ([`rules`]): the shared winning-line catalog plus win and
//!   draw detection.
//! - **Move selector** ([`ai`]): a fixed priority policy (win, block,
//!   center, corner, side) that picks exactly one empty square per turn.
//! - **Engine** ([`Game`]): validated moves, turn alternation, status
//!   tracking, and the move history.
//!
//! The selector and the rules are pure over the 9-square board except for
//! the selector marking its chosen square; there is no search, no
//! randomness, and no hidden state between turns.
//!
//! ```
//! use tictactoe_rulebot::{Board, Player, Position, ai};
//!
//! let mut board = Board::new();
//! // On an empty board the policy falls through to the center rule.
//! assert_eq!(ai::select_move(&mut board, Player::X), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod engine;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
