//! Rule-based tic-tac-toe console game.
//!
//! The human and the bot alternate turns on a shared board; the bot plays
//! the fixed win/block/center/corner/side policy. Input, rendering, and all
//! user-facing error messages live here, outside the core.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, Write};
use tictactoe_rulebot::{Game, GameStatus, MoveError, Player, Position};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the board rendering on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let human: Player = cli.human_mark.into();
    let bot = human.opponent();
    let first = if cli.bot_first { bot } else { human };
    info!(%human, %bot, %first, "starting game");

    println!("Welcome to rule-based tic-tac-toe!");
    println!("You are '{human}' and the bot is '{bot}'.");
    println!("Enter a square number (1-9, as shown on the board) or a name like \"center\".\n");

    let game = play(Game::starting_with(first), human)?;

    if let Some(path) = &cli.record {
        let json = serde_json::to_string_pretty(game.history())
            .context("failed to serialize game record")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write game record to {}", path.display()))?;
        println!("Game record written to {}.", path.display());
    }

    println!("Thank you for playing!");
    Ok(())
}

/// Runs the game loop until a terminal state, returning the finished game.
fn play(mut game: Game, human: Player) -> Result<Game> {
    loop {
        println!("{}\n", game.board().display());

        match game.status() {
            GameStatus::Won(winner) => {
                if winner == human {
                    println!("Game over - you win!");
                } else {
                    println!("Game over - the bot ({winner}) wins!");
                }
                return Ok(game);
            }
            GameStatus::Draw => {
                println!("Game over - it's a tie!");
                return Ok(game);
            }
            GameStatus::InProgress => {}
        }

        if game.to_move() == human {
            human_turn(&mut game)?;
        } else {
            let mov = game.auto_move()?;
            println!("The bot plays {} ({}).\n", mov.position.to_index() + 1, mov.position);
        }
    }
}

/// Prompts until the human enters a move the engine accepts.
fn human_turn(game: &mut Game) -> Result<()> {
    loop {
        print!("Your move: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        anyhow::ensure!(read > 0, "input closed before the game finished");

        let Some(pos) = Position::from_user_input(&line) else {
            println!("Invalid input. Enter a number from 1 to 9 or a square name.");
            continue;
        };

        match game.make_move(pos) {
            Ok(()) => {
                debug!(position = %pos, "human move accepted");
                return Ok(());
            }
            Err(MoveError::SquareOccupied(pos)) => {
                let open: Vec<String> = Position::valid_moves(game.board())
                    .iter()
                    .map(|p| (p.to_index() + 1).to_string())
                    .collect();
                println!(
                    "{} is already taken. Open squares: {}.",
                    pos,
                    open.join(", ")
                );
            }
            // Unreachable: the loop checks status before prompting.
            Err(err) => anyhow::bail!(err),
        }
    }
}
