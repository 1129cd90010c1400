//! Loading rosters from files on disk.

use std::io::Write;

use battle_content::Roster;
use battle_core::{Affinity, MoveKind};
use tempfile::NamedTempFile;

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write roster");
    file
}

#[test]
fn custom_roster_round_trips_through_a_file() {
    let file = write_roster(
        r#"[
            (
                name: "Emberling",
                max_health: 400,
                max_energy: Some(60),
                affinities: [Fire],
                moves: [
                    ("Flare", (kind: Damage, cost: 30, amount: 90, affinity: Fire)),
                    ("Smolder", (kind: Heal, cost: 20, amount: 50, affinity: Fire)),
                ],
            ),
            (
                name: "Pebble",
                max_health: 300,
                affinities: [Rock],
                moves: [
                    ("Harden", (kind: Block, cost: 10, amount: 80, affinity: Rock)),
                ],
            ),
        ]"#,
    );

    let roster = Roster::load(file.path()).unwrap();
    assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Emberling", "Pebble"]);

    let ember = roster.spawn("Emberling").unwrap();
    assert_eq!(ember.max_energy(), 60);
    assert_eq!(ember.energy_regen(), 20);
    assert_eq!(ember.affinities(), &[Affinity::Fire]);
    assert_eq!(ember.find_move("Smolder").map(|m| m.kind), Some(MoveKind::Heal));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ron");

    let err = Roster::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.ron"));
}

#[test]
fn reserved_move_name_is_rejected() {
    let file = write_roster(
        r#"[
            (
                name: "Cheater",
                max_health: 100,
                affinities: [None],
                moves: [("Skip", (kind: Damage, cost: 0, amount: 999, affinity: None))],
            ),
        ]"#,
    );

    let err = Roster::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid roster"));
}
