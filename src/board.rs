//! The battle field: ships, the coordinate map, validation and firing.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Grid;
use crate::common::{BoardError, FireResult};
use crate::config::{
    ALIVE_DECK, BOARD_SIZE, COMPOSITION_TOTAL, DEAD_DECK, DECK_KINDS, FLEET_SIZE, WATER,
};
use crate::ship::{Coordinate, Ship, ShipSpec};

/// Ship placements plus a sparse map from coordinate to the owning ship.
///
/// Ships live in `ships` in input order; `field` stores indices into it.
/// Overlapping specs overwrite earlier field entries, so a ship can end up
/// partly or fully absent from the field.
#[derive(Debug, Clone)]
pub struct Battleship {
    ships: Vec<Ship>,
    field: BTreeMap<Coordinate, usize>,
    diagnostic: Option<BoardError>,
}

impl Battleship {
    /// Build the field from `(start, end)` pairs and validate it.
    ///
    /// Construction always succeeds. A failed check is logged as a warning and
    /// kept in [`Battleship::diagnostic`].
    pub fn new<I>(specs: I) -> Self
    where
        I: IntoIterator<Item = ShipSpec>,
    {
        let mut ships = Vec::new();
        let mut field = BTreeMap::new();
        for (start, end) in specs {
            let ship = Ship::new(start, end);
            let index = ships.len();
            for cell in ship.cells() {
                field.insert(cell, index);
            }
            ships.push(ship);
        }
        let mut board = Battleship {
            ships,
            field,
            diagnostic: None,
        };
        if let Err(err) = board.validate() {
            log::warn!("{}", err);
            board.diagnostic = Some(err);
        }
        board
    }

    /// First failed check from construction, if any.
    pub fn diagnostic(&self) -> Option<&BoardError> {
        self.diagnostic.as_ref()
    }

    /// Check fleet size, composition and spacing, stopping at the first failure.
    pub fn validate(&self) -> Result<(), BoardError> {
        let fleet = self.fleet_indices();
        if fleet.len() != FLEET_SIZE {
            return Err(BoardError::WrongFleetSize { found: fleet.len() });
        }

        // Ships longer than the largest deck kind are left out of the histogram.
        let mut ships_by_type = [0usize; DECK_KINDS.len()];
        for &index in &fleet {
            let length = self.ships[index].len();
            if let Some(slot) = DECK_KINDS.iter().position(|&kind| kind == length) {
                ships_by_type[slot] += 1;
            }
        }
        for (slot, &decks) in DECK_KINDS.iter().enumerate() {
            let found = ships_by_type[slot];
            if decks + found != COMPOSITION_TOTAL {
                return Err(BoardError::WrongComposition {
                    decks,
                    expected: COMPOSITION_TOTAL - decks,
                    found,
                });
            }
        }

        let occupancy = self.occupancy();
        for &index in &fleet {
            let Some(((top, left), (bottom, right))) = self.ships[index].bounds() else {
                continue;
            };
            let touching = Grid::halo(top, left, bottom, right) & occupancy;
            if let Some(at) = touching.iter_set_bits().next() {
                return Err(BoardError::ShipsTouching { at });
            }
        }
        Ok(())
    }

    /// Fire at `location`.
    pub fn fire(&mut self, location: Coordinate) -> FireResult {
        let Some(&index) = self.field.get(&location) else {
            log::debug!("shot at {:?}: miss", location);
            return FireResult::Miss;
        };
        let ship = &mut self.ships[index];
        ship.fire(location.0, location.1);
        let result = if ship.is_drowned() {
            FireResult::Sunk
        } else {
            FireResult::Hit
        };
        log::debug!("shot at {:?}: {:?}", location, result);
        result
    }

    /// Ship occupying `location`.
    pub fn ship_at(&self, location: Coordinate) -> Option<&Ship> {
        self.field.get(&location).map(|&index| &self.ships[index])
    }

    /// Distinct ships referenced by the field, in input order.
    pub fn fleet(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.fleet_indices()
            .into_iter()
            .map(move |index| &self.ships[index])
    }

    /// `true` once every ship in the field has sunk. A field without ships
    /// has nothing to sink and reports `false`.
    pub fn all_sunk(&self) -> bool {
        let mut fleet = self.fleet().peekable();
        fleet.peek().is_some() && fleet.all(Ship::is_drowned)
    }

    /// In-grid cells present in the field.
    pub fn occupancy(&self) -> Grid {
        Grid::from_cells(self.field.keys().copied())
    }

    /// Text view of the grid, one line per row.
    pub fn render(&self) -> String {
        alloc::format!("{}", self)
    }

    fn fleet_indices(&self) -> BTreeSet<usize> {
        self.field.values().copied().collect()
    }

    fn symbol(&self, location: Coordinate) -> char {
        match self.ship_at(location) {
            Some(ship) => match ship.get_deck(location.0, location.1) {
                Some(deck) if deck.is_alive => ALIVE_DECK,
                _ => DEAD_DECK,
            },
            None => WATER,
        }
    }
}

impl fmt::Display for Battleship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.symbol((row, column)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
