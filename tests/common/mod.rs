#![allow(dead_code)]

use sea_battle::ShipSpec;

/// Standard fleet with every ship isolated.
pub fn standard_fleet() -> Vec<ShipSpec> {
    vec![
        ((0, 0), (0, 3)),
        ((0, 5), (0, 7)),
        ((2, 0), (2, 2)),
        ((2, 4), (2, 5)),
        ((2, 7), (2, 8)),
        ((4, 0), (4, 1)),
        ((0, 9), (0, 9)),
        ((4, 3), (4, 3)),
        ((4, 5), (4, 5)),
        ((4, 7), (4, 7)),
    ]
}

/// Standard fleet where the 1-deck ships at (0,0) and (0,1) touch.
pub fn touching_fleet() -> Vec<ShipSpec> {
    vec![
        ((0, 0), (0, 0)),
        ((0, 1), (0, 1)),
        ((9, 7), (9, 7)),
        ((9, 9), (9, 9)),
        ((2, 0), (2, 3)),
        ((4, 0), (4, 2)),
        ((4, 4), (4, 6)),
        ((6, 0), (6, 1)),
        ((6, 3), (6, 4)),
        ((6, 6), (6, 7)),
    ]
}
