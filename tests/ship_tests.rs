use sea_battle::{Deck, Ship};

#[test]
fn test_horizontal_ship_decks_in_order() {
    let ship = Ship::new((2, 1), (2, 4));
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    assert!(ship.decks().iter().all(|d| d.is_alive));
    assert!(!ship.is_drowned());
}

#[test]
fn test_vertical_ship_decks_in_order() {
    let ship = Ship::new((5, 7), (7, 7));
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(5, 7), (6, 7), (7, 7)]);
    assert_eq!(ship.bounds(), Some(((5, 7), (7, 7))));
}

#[test]
fn test_single_cell_ship() {
    let ship = Ship::new((3, 3), (3, 3));
    assert_eq!(ship.len(), 1);
    assert_eq!(ship.mask().count_ones(), 1);
}

#[test]
fn test_non_straight_endpoints_fill_rectangle() {
    let ship = Ship::new((0, 0), (1, 1));
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_reversed_endpoints_produce_no_decks() {
    let ship = Ship::new((0, 3), (0, 0));
    assert!(ship.is_empty());
    assert_eq!(ship.bounds(), None);
}

#[test]
fn test_get_deck() {
    let ship = Ship::new((1, 1), (1, 2));
    assert_eq!(ship.get_deck(1, 2), Some(&Deck::new(1, 2)));
    assert_eq!(ship.get_deck(2, 2), None);
}

#[test]
fn test_fire_until_drowned() {
    let mut ship = Ship::new((4, 4), (4, 5));
    ship.fire(4, 5);
    assert!(!ship.get_deck(4, 5).unwrap().is_alive);
    assert!(!ship.is_drowned());
    ship.fire(4, 4);
    assert!(ship.is_drowned());
    // refiring a dead deck keeps the ship sunk
    ship.fire(4, 4);
    assert!(ship.is_drowned());
}

#[test]
fn test_fire_outside_ship_is_ignored() {
    let mut ship = Ship::new((0, 0), (0, 1));
    let before = ship.clone();
    ship.fire(5, 5);
    assert_eq!(ship, before);
}

#[test]
fn test_text_forms() {
    let mut ship = Ship::new((0, 0), (0, 0));
    assert_eq!(ship.to_string(), "Ship((0, 0), (0, 0), false)");
    ship.fire(0, 0);
    assert_eq!(ship.to_string(), "Ship((0, 0), (0, 0), true)");
    assert_eq!(Deck::new(3, 9).to_string(), "(3, 9)");
}

#[test]
fn test_deck_with_state() {
    let dead = Deck::with_state(2, 6, false);
    assert!(!dead.is_alive);
    assert_eq!(dead.position(), (2, 6));
    assert_eq!(Deck::with_state(1, 1, true), Deck::new(1, 1));
}
