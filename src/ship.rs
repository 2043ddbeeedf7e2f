//! Decks and ships.
//!
//! A ship covers every cell of the inclusive rectangle between its two
//! endpoints. Straight ships come from endpoints sharing a row or a column;
//! the constructor does not check this.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Grid;

/// Grid coordinate as `(row, column)`.
pub type Coordinate = (usize, usize);

/// Ship placement as `(start, end)` endpoints.
pub type ShipSpec = (Coordinate, Coordinate);

/// A single cell occupied by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    pub row: usize,
    pub column: usize,
    pub is_alive: bool,
}

impl Deck {
    /// A live deck at (`row`, `column`).
    pub fn new(row: usize, column: usize) -> Self {
        Self::with_state(row, column, true)
    }

    pub fn with_state(row: usize, column: usize, is_alive: bool) -> Self {
        Self {
            row,
            column,
            is_alive,
        }
    }

    pub fn position(&self) -> Coordinate {
        (self.row, self.column)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A ship: its endpoints, its decks in row-major order, and whether it sank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    start: Coordinate,
    end: Coordinate,
    is_drowned: bool,
    decks: Vec<Deck>,
}

impl Ship {
    /// Build the decks of `[start.0, end.0] × [start.1, end.1]`, row outer.
    /// Reversed endpoints produce a ship without decks.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        let mut decks = Vec::new();
        for row in start.0..=end.0 {
            for column in start.1..=end.1 {
                decks.push(Deck::new(row, column));
            }
        }
        Ship {
            start,
            end,
            is_drowned: false,
            decks,
        }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn is_drowned(&self) -> bool {
        self.is_drowned
    }

    /// Coordinates of all decks in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.decks.iter().map(Deck::position)
    }

    /// First and last deck positions, the corners of the ship's bounding box.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let first = self.decks.first()?;
        let last = self.decks.last()?;
        Some((first.position(), last.position()))
    }

    /// In-grid cells of the ship.
    pub fn mask(&self) -> Grid {
        Grid::from_cells(self.cells())
    }

    /// Deck at (`row`, `column`), if it belongs to this ship.
    pub fn get_deck(&self, row: usize, column: usize) -> Option<&Deck> {
        self.decks
            .iter()
            .find(|deck| deck.row == row && deck.column == column)
    }

    fn get_deck_mut(&mut self, row: usize, column: usize) -> Option<&mut Deck> {
        self.decks
            .iter_mut()
            .find(|deck| deck.row == row && deck.column == column)
    }

    /// Destroy the deck at (`row`, `column`). Coordinates outside the ship are ignored.
    pub fn fire(&mut self, row: usize, column: usize) {
        if let Some(deck) = self.get_deck_mut(row, column) {
            deck.is_alive = false;
            if self.decks.iter().all(|deck| !deck.is_alive) {
                self.is_drowned = true;
            }
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship(({}, {}), ({}, {}), {})",
            self.start.0, self.start.1, self.end.0, self.end.1, self.is_drowned
        )
    }
}
