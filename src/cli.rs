#![cfg(feature = "std")]

//! Parsing of typed coordinates and fleet files.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::config::BOARD_SIZE;
use crate::ship::{Coordinate, ShipSpec};

/// Parse `"row column"` or `"row,column"`, each in `0..BOARD_SIZE`.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let parts: Vec<&str> = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, column] = parts.as_slice() else {
        return Err(format!(
            "Expected a row and a column (e.g. 3 5), got '{}'",
            input
        ));
    };
    Ok((parse_index(row, "row")?, parse_index(column, "column")?))
}

fn parse_index(part: &str, what: &str) -> Result<usize, String> {
    let value: usize = part
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 0-{}", what, part, BOARD_SIZE - 1))?;
    if value >= BOARD_SIZE {
        return Err(format!(
            "{} {} out of bounds - must be 0-{}",
            what,
            value,
            BOARD_SIZE - 1
        ));
    }
    Ok(value)
}

/// Parse a fleet layout written as `[[[r, c], [r, c]], ...]`.
pub fn parse_fleet(json: &str) -> anyhow::Result<Vec<ShipSpec>> {
    serde_json::from_str(json).context("fleet must be a list of [[row, column], [row, column]] pairs")
}

/// Read a fleet layout from `path`.
pub fn load_fleet(path: &Path) -> anyhow::Result<Vec<ShipSpec>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read fleet file {}", path.display()))?;
    parse_fleet(&json)
}
