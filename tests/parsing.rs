use std::fs;
use std::path::PathBuf;

use rinkboard::payload::{
    parse_chemistry_rows_json, parse_goalie_rows_json, parse_skater_rows_json,
    parse_threshold_book_json,
};
use rinkboard::rows::Position;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn skater_payload_parses_full_and_partial_rows() {
    let rows = parse_skater_rows_json(&read_fixture("skater_rows.json")).expect("should parse");
    assert_eq!(rows.len(), 4);

    let rory = rows.iter().find(|r| r.id == 101).unwrap();
    assert_eq!(rory.name, "Rory Lindqvist");
    assert_eq!(rory.position, Position::Center);
    assert_eq!(rory.points(), 42);
    assert!(rory.rookie);
    assert_eq!(rory.expected_goals, Some(14.2));
    assert!((rory.corsi_for.unwrap().fraction() - 0.545).abs() < 1e-12);
    assert_eq!(rory.birth_date.as_deref(), Some("2006-02-11"));

    // The sparse row parses with every optional field defaulted, not an error.
    let teo = rows.iter().find(|r| r.id == 103).unwrap();
    assert_eq!(teo.position, Position::Wing);
    assert_eq!(teo.toi_secs, 0);
    assert!(teo.expected_goals.is_none());
    assert!(teo.corsi_for.is_none());
    assert!(teo.birth_date.is_none());
}

#[test]
fn goalie_payload_parses() {
    let rows = parse_goalie_rows_json(&read_fixture("goalie_rows.json")).expect("should parse");
    assert_eq!(rows.len(), 2);

    let starter = rows.iter().find(|g| g.id == 901).unwrap();
    assert_eq!(starter.starts, 42);
    assert_eq!(starter.team_games, 62);
    assert_eq!(starter.expected_goals_against, Some(109.4));

    let backup = rows.iter().find(|g| g.id == 902).unwrap();
    assert!(backup.expected_goals_against.is_none());
}

#[test]
fn chemistry_payload_parses_with_optional_share() {
    let rows =
        parse_chemistry_rows_json(&read_fixture("chemistry_rows.json")).expect("should parse");
    assert_eq!(rows.len(), 4);

    let with_share = rows.iter().find(|p| p.player_a == 101).unwrap();
    assert!((with_share.xg_share.unwrap().fraction() - 0.58).abs() < 1e-12);

    let without_share = rows.iter().find(|p| p.player_a == 103).unwrap();
    assert!(without_share.xg_share.is_none());
    assert_eq!(without_share.toi_secs, 600);
}

#[test]
fn threshold_payload_builds_a_book() {
    let book =
        parse_threshold_book_json(&read_fixture("threshold_book.json")).expect("should parse");
    assert_eq!(book.len(), 2);
    let table = book.table("pointsPer60").unwrap();
    assert_eq!(table.season, "2025-26");
    assert_eq!(table.bounds.len(), 8);
    assert_eq!(book.percentile("pointsPer60", 2.8), Some(7));
}
