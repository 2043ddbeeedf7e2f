//! Commonly used types for ease of import.

pub use crate::{random_fleet, Battleship, BoardError, Coordinate, FireResult, Ship, ShipSpec};

#[cfg(feature = "std")]
pub use crate::{run_session, simulate, SessionSummary};
