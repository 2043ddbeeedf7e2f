use sea_battle::{BitBoard, BitBoardError, Grid};

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());
    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert_eq!(
        bb.set(4, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
    assert!(!bb.contains(4, 0));
}

#[test]
fn test_from_cells_skips_off_grid() {
    let bb = BitBoard::<u16, 4>::from_cells([(0, 1), (3, 3), (7, 7)]);
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_rect_clips_to_grid() {
    let rect = Grid::rect(8, 8, 12, 12);
    let bits: Vec<_> = rect.iter_set_bits().collect();
    assert_eq!(bits, vec![(8, 8), (8, 9), (9, 8), (9, 9)]);
    assert!(Grid::rect(10, 0, 12, 3).is_empty());
}

#[test]
fn test_halo_in_corner() {
    let halo = Grid::halo(0, 0, 0, 1);
    let bits: Vec<_> = halo.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 2), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_halo_in_middle_surrounds_cell() {
    let halo = Grid::halo(5, 5, 5, 5);
    assert_eq!(halo.count_ones(), 8);
    assert!(!halo.contains(5, 5));
}

#[test]
fn test_not_stays_within_board() {
    let full = !BitBoard::<u16, 3>::new();
    assert_eq!(full.count_ones(), 9);
}
