//! Common types: fire results and board errors.

use crate::bitboard::BitBoardError;
use crate::config::FLEET_SIZE;
use crate::Coordinate;

/// Outcome of a shot at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Shot destroyed a deck of a ship that is still afloat.
    Hit,
    /// No ship at the coordinate.
    Miss,
    /// Shot left the ship with no live decks.
    Sunk,
}

impl FireResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            FireResult::Hit => "Hit!",
            FireResult::Miss => "Miss!",
            FireResult::Sunk => "Sunk!",
        }
    }
}

impl core::fmt::Display for FireResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by board validation and fleet placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (out-of-grid index).
    BitBoardError(BitBoardError),
    /// The field does not reference exactly `FLEET_SIZE` distinct ships.
    WrongFleetSize { found: usize },
    /// A deck kind failed the composition check.
    WrongComposition {
        decks: usize,
        expected: usize,
        found: usize,
    },
    /// An occupied cell sits next to another ship.
    ShipsTouching { at: Coordinate },
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::WrongFleetSize { found } => {
                write!(f, "There must be {} ships, but are {}", FLEET_SIZE, found)
            }
            BoardError::WrongComposition {
                decks, expected, ..
            } => write!(f, "There must be {} ships, with {} decks", expected, decks),
            BoardError::ShipsTouching { .. } => {
                write!(f, "The ships are not positioned correctly")
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
