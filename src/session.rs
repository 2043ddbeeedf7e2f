#![cfg(feature = "std")]

//! Line-oriented firing session and automatic simulation.

use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::board::Battleship;
use crate::cli::parse_coord;
use crate::common::FireResult;
use crate::config::BOARD_SIZE;

/// Shot counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub sunk: usize,
}

impl SessionSummary {
    fn record(&mut self, result: FireResult) {
        self.shots += 1;
        match result {
            FireResult::Hit => self.hits += 1,
            FireResult::Miss => self.misses += 1,
            FireResult::Sunk => {
                self.hits += 1;
                self.sunk += 1;
            }
        }
    }
}

/// Read commands from `input` and answer on `output` until `quit`, end of
/// input, or the last ship sinks.
///
/// Each line is a coordinate, `show` to print the grid, or `quit`.
pub fn run_session<R, W>(
    board: &mut Battleship,
    input: R,
    mut output: W,
) -> anyhow::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "show" => write!(output, "{}", board)?,
            _ => match parse_coord(command) {
                Ok(location) => {
                    let result = board.fire(location);
                    summary.record(result);
                    writeln!(output, "{}", result)?;
                    if board.all_sunk() {
                        writeln!(output, "All ships sunk!")?;
                        break;
                    }
                }
                Err(msg) => writeln!(output, "Invalid input: {}", msg)?,
            },
        }
    }
    output.flush()?;
    Ok(summary)
}

/// Fire at every cell in random order until the fleet is gone.
pub fn simulate<R: Rng>(board: &mut Battleship, rng: &mut R) -> SessionSummary {
    let mut cells: Vec<_> = (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |column| (row, column)))
        .collect();
    cells.shuffle(rng);

    let mut summary = SessionSummary::default();
    for location in cells {
        if board.all_sunk() {
            break;
        }
        summary.record(board.fire(location));
    }
    summary
}
