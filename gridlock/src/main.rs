//! Command-line front end for the pursuit sandbox.
//!
//! `play` steps a board through a move string and prints the state after
//! every move; `solve` extends a move string with one that wrecks every
//! robot.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use gridlock::board::Board;
use gridlock::direction::{Move, format_moves, parse_moves};
use gridlock::game::{Game, Outcome};
use gridlock::position::Position;
use gridlock::solver;

#[derive(Parser)]
#[command(name = "gridlock", about = "Robot pursuit sandbox and autosolver")]
struct Cli {
    /// Emit one JSON record per line instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Step a board through a move string, printing the state after every move.
    Play {
        /// Robot coordinates, then the player's, e.g. "3 0 3 2 0 0".
        board: Board,
        /// Moves to apply, one letter per move from u, d, l, r.
        #[arg(default_value = "")]
        moves: String,
    },
    /// Find a move string that wrecks every robot.
    Solve {
        /// Robot coordinates, then the player's.
        board: Board,
        /// Moves already played before the solver takes over.
        #[arg(long, default_value = "")]
        moves: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Play { board, moves } => play(board, &moves, cli.json),
        Command::Solve { board, moves } => solve(board, &moves, cli.json),
    }
}

fn play(board: Board, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let mut game = board.game();
    print_step(None, &game, "", None, json)?;
    for m in moves {
        match game.step(m) {
            Outcome::Alive { crash } => print_step(Some(m), &game, &crash, None, json)?,
            Outcome::Lost(reason) => {
                print_step(Some(m), &game, "", Some(reason.to_string()), json)?;
                break;
            }
        }
    }
    Ok(())
}

fn solve(board: Board, prefix: &str, json: bool) -> Result<()> {
    let prefix = parse_moves(prefix)?;
    let mut game = board.game();
    if let Outcome::Lost(reason) = game.play_all(&prefix) {
        bail!("already lost: {reason}");
    }
    let solution = solver::solve(game.player(), game.robots()).context("no solution")?;
    let all = format_moves(&prefix) + &format_moves(&solution);
    if json {
        println!("{}", serde_json::to_string(&SolveRecord { moves: &all })?);
    } else {
        println!("{all}");
    }
    Ok(())
}

fn print_step(
    mv: Option<Move>,
    game: &Game,
    crash: &str,
    lost: Option<String>,
    json: bool,
) -> Result<()> {
    if json {
        let record = StepRecord {
            mv: mv.map(Move::as_char),
            player: game.player(),
            robots: game.robots(),
            crash,
            lost,
        };
        println!("{}", serde_json::to_string(&record)?);
        return Ok(());
    }
    if let Some(reason) = lost {
        println!("{reason}");
    } else {
        println!("{}", game.state_line_with(crash));
    }
    Ok(())
}

#[derive(Serialize)]
struct StepRecord<'a> {
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    mv: Option<char>,
    player: Position,
    robots: &'a [Position],
    #[serde(skip_serializing_if = "str::is_empty")]
    crash: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    lost: Option<String>,
}

#[derive(Serialize)]
struct SolveRecord<'a> {
    moves: &'a str,
}
