//! Bridge and torch solver

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use tictactoe::bridge::cross_bridge;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bridge", about = "Greedy bridge and torch schedule")]
struct Args {
    /// Crossing time of each person; read from stdin when omitted
    times: Vec<u32>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let times = if args.times.is_empty() {
        match read_times(io::stdin().lock()) {
            Ok(times) => times,
            Err(msg) => {
                eprintln!("error: {}", msg);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.times
    };

    debug!(people = times.len(), "scheduling crossing");
    println!("{}", cross_bridge(&times));
    ExitCode::SUCCESS
}

/// Prompt for the number of people, then their times
fn read_times(input: impl BufRead) -> Result<Vec<u32>, String> {
    println!("Number of people:");

    let mut numbers = Vec::new();
    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a non-negative integer", token))?;
            numbers.push(value);
        }
    }

    let Some((&count, rest)) = numbers.split_first() else {
        return Err("no input".to_string());
    };
    let count = count as usize;
    if rest.len() < count {
        return Err(format!("expected {} crossing times, got {}", count, rest.len()));
    }
    Ok(rest[..count].to_vec())
}
