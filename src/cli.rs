//! Command-line interface for the console game.

use clap::{Parser, ValueEnum};
use tictactoe_rulebot::Player;

/// Rule-based tic-tac-toe against a deterministic bot.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rulebot")]
#[command(about = "Play tic-tac-toe against a rule-based bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark the human plays; the bot takes the other one.
    #[arg(long, value_enum, default_value = "o")]
    pub human_mark: Mark,

    /// Let the bot make the first move.
    #[arg(long)]
    pub bot_first: bool,

    /// Write the finished game's move history to this file as JSON.
    #[arg(long)]
    pub record: Option<std::path::PathBuf>,
}

/// A player mark as a CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mark {
    /// Play as X.
    X,
    /// Play as O.
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}
