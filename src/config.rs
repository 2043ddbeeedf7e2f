//! Board dimensions, the standard fleet, and render symbols.

pub const BOARD_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 10;

/// Ship lengths of the standard fleet, longest first.
pub const FLEET: [usize; FLEET_SIZE] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Ship lengths in the order the composition check visits them.
pub const DECK_KINDS: [usize; 4] = [4, 3, 2, 1];

/// Every deck kind must satisfy `length + ships_of_that_length == COMPOSITION_TOTAL`.
pub const COMPOSITION_TOTAL: usize = 5;

pub const ALIVE_DECK: char = '□';
pub const DEAD_DECK: char = '*';
pub const WATER: char = '~';
