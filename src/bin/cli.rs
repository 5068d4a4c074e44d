//! Console front-end: play against the engine or analyze a position

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tictactoe::{game_status, Board, Engine, Error, Game, GameStatus, Mark, DEFAULT_MAX_DEPTH};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tictactoe-cli", about = "Play or analyze 3x3 / 4x4 tic-tac-toe")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play an interactive game on the console (you are O)
    Play {
        /// Board size: 3 or 4
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=4))]
        size: u8,

        /// Engine search depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: u8,

        /// Let the engine (X) move first
        #[arg(long)]
        engine_first: bool,
    },
    /// Print the status and the engine's best move for a position
    Analyze {
        /// Board rows separated by '/', cells X, O and '.', e.g. "XX./.O./O.."
        #[arg(long)]
        board: String,

        /// Engine search depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: u8,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let result = match args.command {
        Command::Play {
            size,
            depth,
            engine_first,
        } => {
            let first = if engine_first { Mark::Engine } else { Mark::Human };
            let stdin = io::stdin();
            let stdout = io::stdout();
            let outcome = if size == 4 {
                play::<4>(first, depth, stdin.lock(), stdout.lock())
            } else {
                play::<3>(first, depth, stdin.lock(), stdout.lock())
            };
            outcome.map_err(|e| format!("I/O error: {}", e))
        }
        Command::Analyze { board, depth } => analyze(&board, depth),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {}", msg);
            ExitCode::FAILURE
        }
    }
}

/// Interactive game loop. Returns when the game ends or input runs out.
fn play<const N: usize>(first: Mark, depth: u8, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut game: Game<N> = Game::new(first, Engine::with_depth(depth));
    let mut lines = input.lines();

    writeln!(out, "You are O, the engine is X. Enter moves as `row col` (1-{}).", N)?;

    while !game.is_over() {
        if game.is_engine_turn() {
            match game.play_engine() {
                Ok(result) => {
                    let (row, col) = result.coords();
                    writeln!(
                        out,
                        "Engine plays row {}, col {} (score {}, {} nodes)",
                        row + 1,
                        col + 1,
                        result.score,
                        result.nodes
                    )?;
                }
                Err(err) => {
                    writeln!(out, "Engine could not move: {}", err)?;
                    return Ok(());
                }
            }
            continue;
        }

        writeln!(out, "\n{}", game.board())?;
        write!(out, "Your move: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out, "\nInput closed, leaving the game.")?;
            return Ok(());
        };
        let line = line?;

        let Some((row, col)) = parse_move(&line) else {
            writeln!(out, "Invalid move: enter a row and a column, e.g. `2 3`.")?;
            continue;
        };

        match game.play_human(row - 1, col - 1) {
            Ok(_) => {}
            Err(Error::InvalidMove { reason, .. }) => {
                writeln!(out, "Invalid move: row {}, col {} is {}.", row, col, reason)?;
            }
            Err(err) => {
                writeln!(out, "Invalid move: {}.", err)?;
            }
        }
    }

    writeln!(out, "\n{}", game.board())?;
    let verdict = match game.status() {
        GameStatus::EngineWins => "The engine wins!",
        GameStatus::HumanWins => "You win!",
        GameStatus::Draw | GameStatus::InProgress => "Draw!",
    };
    writeln!(out, "{}", verdict)
}

/// Parse 1-based `row col`, separated by whitespace or a comma
fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i32>());
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Count non-empty rows, the way `Board::from_str` splits them
fn row_count(text: &str) -> usize {
    text.split(['/', '\n']).filter(|r| !r.trim().is_empty()).count()
}

fn analyze(text: &str, depth: u8) -> Result<(), String> {
    if row_count(text) == 4 {
        analyze_board::<4>(text, depth)
    } else {
        analyze_board::<3>(text, depth)
    }
}

fn analyze_board<const N: usize>(text: &str, depth: u8) -> Result<(), String> {
    let board: Board<N> = text.trim().parse().map_err(|e: Error| e.to_string())?;
    let result = Engine::with_depth(depth).best_move_with_stats(&board);
    let (row, col) = result.coords();

    println!("{}", board);
    println!("Status: {}", game_status(&board));
    match result.best_move {
        Some(_) => println!("Best move: row {}, col {} (raw {} {})", row + 1, col + 1, row, col),
        None => println!("Best move: none (raw {} {})", row, col),
    }
    println!("Score: {}", result.score);
    println!("Nodes: {}", result.nodes);
    println!("Time: {} ms", result.time_ms());
    Ok(())
}
