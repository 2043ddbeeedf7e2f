mod common;

use std::path::Path;

use common::standard_fleet;
use sea_battle::{load_fleet, parse_coord, parse_fleet};

#[test]
fn test_parse_coord_forms() {
    assert_eq!(parse_coord("3 5"), Ok((3, 5)));
    assert_eq!(parse_coord(" 0,9 "), Ok((0, 9)));
    assert_eq!(parse_coord("7, 2"), Ok((7, 2)));
}

#[test]
fn test_parse_coord_rejects_bad_input() {
    assert!(parse_coord("").is_err());
    assert!(parse_coord("3").is_err());
    assert!(parse_coord("3 5 1").is_err());
    assert!(parse_coord("a 5").is_err());
    let err = parse_coord("10 0").unwrap_err();
    assert!(err.contains("out of bounds"), "{}", err);
}

#[test]
fn test_parse_fleet() {
    let specs = parse_fleet("[[[0, 0], [0, 3]], [[5, 5], [5, 5]]]").unwrap();
    assert_eq!(specs, vec![((0, 0), (0, 3)), ((5, 5), (5, 5))]);
    assert!(parse_fleet("[[0, 0]]").is_err());
}

#[test]
fn test_load_fleet_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/standard_fleet.json");
    assert_eq!(load_fleet(&path).unwrap(), standard_fleet());
}

#[test]
fn test_load_fleet_missing_file() {
    let err = load_fleet(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read fleet file"));
}
