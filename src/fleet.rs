//! Random placement of a standard fleet.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::Grid;
use crate::board::Battleship;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::{Coordinate, ShipSpec};

const PLACEMENT_ATTEMPTS: usize = 100;
const FLEET_ATTEMPTS: usize = 20;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// End coordinate of a ship of `length` starting at `start`.
    pub fn end(self, start: Coordinate, length: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => (start.0, start.1 + length - 1),
            Orientation::Vertical => (start.0 + length - 1, start.1),
        }
    }
}

/// Generate the standard fleet with every ship isolated from the others.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Vec<ShipSpec>, BoardError> {
    for attempt in 0..FLEET_ATTEMPTS {
        if let Some(specs) = try_place_fleet(rng) {
            return Ok(specs);
        }
        log::debug!("fleet placement attempt {} failed, restarting", attempt + 1);
    }
    Err(BoardError::UnableToPlaceShip)
}

fn try_place_fleet<R: Rng>(rng: &mut R) -> Option<Vec<ShipSpec>> {
    let mut specs = Vec::with_capacity(FLEET.len());
    // Ship cells plus their halos.
    let mut blocked = Grid::new();
    for &length in FLEET.iter() {
        let (start, end) = random_placement(rng, &blocked, length)?;
        blocked |= Grid::rect(
            start.0.saturating_sub(1),
            start.1.saturating_sub(1),
            end.0 + 1,
            end.1 + 1,
        );
        specs.push((start, end));
    }
    Some(specs)
}

/// Random `(start, end)` for a ship of `length` avoiding every `blocked` cell.
fn random_placement<R: Rng>(rng: &mut R, blocked: &Grid, length: usize) -> Option<ShipSpec> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical {
            BOARD_SIZE - length
        } else {
            BOARD_SIZE - 1
        };
        let max_c = if orient == Orientation::Horizontal {
            BOARD_SIZE - length
        } else {
            BOARD_SIZE - 1
        };
        let start = (rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        let end = orient.end(start, length);
        let mask = Grid::rect(start.0, start.1, end.0, end.1);
        if (mask & *blocked).is_empty() {
            return Some((start, end));
        }
    }
    None
}

impl Battleship {
    /// Board holding a freshly generated standard fleet.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        Ok(Battleship::new(random_fleet(rng)?))
    }
}
