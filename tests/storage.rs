//! Integration tests for the in-memory store and CSV roster/standings handling.

use std::io::{self, Write};
use swiss_tournament::{
    compute_standings, export_standings, import_roster, MemoryStore, StandingRecord, Storage,
    TournamentError,
};

#[test]
fn new_players_start_at_zero() {
    let mut store = MemoryStore::new();
    let id = store.add_player("  Ada Lovelace ").unwrap();
    assert_eq!(store.count_players().unwrap(), 1);
    assert_eq!(store.record(id), Some(StandingRecord::default()));
    assert_eq!(store.list_players().unwrap()[0].name, "Ada Lovelace");
}

#[test]
fn blank_name_is_rejected() {
    let mut store = MemoryStore::new();
    assert_eq!(store.add_player("   "), Err(TournamentError::EmptyPlayerName));
    assert_eq!(store.count_players().unwrap(), 0);
}

#[test]
fn record_match_touches_only_the_two_players() {
    let mut store = MemoryStore::new();
    let ids: Vec<_> = ["A", "B", "C", "D"]
        .iter()
        .map(|n| store.add_player(n).unwrap())
        .collect();

    store.record_match(ids[1], ids[2]).unwrap();

    assert_eq!(store.record(ids[1]), Some(StandingRecord { wins: 1, matches: 1 }));
    assert_eq!(store.record(ids[2]), Some(StandingRecord { wins: 0, matches: 1 }));
    assert_eq!(store.record(ids[0]), Some(StandingRecord::default()));
    assert_eq!(store.record(ids[3]), Some(StandingRecord::default()));
}

#[test]
fn unknown_player_leaves_records_untouched() {
    let mut store = MemoryStore::new();
    let a = store.add_player("A").unwrap();

    assert_eq!(
        store.record_match(a, 99),
        Err(TournamentError::UnknownPlayerReference(99))
    );
    assert_eq!(
        store.record_match(99, a),
        Err(TournamentError::UnknownPlayerReference(99))
    );
    assert_eq!(store.record(a), Some(StandingRecord::default()));
}

#[test]
fn player_cannot_beat_themselves() {
    let mut store = MemoryStore::new();
    let a = store.add_player("A").unwrap();
    assert_eq!(store.record_match(a, a), Err(TournamentError::SelfMatch(a)));
    assert_eq!(store.record(a), Some(StandingRecord::default()));
}

#[test]
fn matches_never_below_wins() {
    let mut store = MemoryStore::new();
    let a = store.add_player("A").unwrap();
    let b = store.add_player("B").unwrap();
    for _ in 0..3 {
        store.record_match(a, b).unwrap();
    }
    store.record_match(b, a).unwrap();

    for (_, r) in store.standing_records().unwrap() {
        assert!(r.matches >= r.wins);
    }
    assert_eq!(store.record(a).map(|r| r.losses()), Some(1));
    assert_eq!(store.record(b).map(|r| r.losses()), Some(3));
}

#[test]
fn remove_player_drops_record() {
    let mut store = MemoryStore::new();
    let a = store.add_player("A").unwrap();
    let b = store.add_player("B").unwrap();

    store.remove_player(a).unwrap();
    assert_eq!(store.count_players().unwrap(), 1);
    assert_eq!(store.record(a), None);
    assert_eq!(
        store.remove_player(a),
        Err(TournamentError::UnknownPlayerReference(a))
    );
    assert_eq!(
        store.record_match(a, b),
        Err(TournamentError::UnknownPlayerReference(a))
    );
}

#[test]
fn ids_are_not_reused_after_clearing() {
    let mut store = MemoryStore::new();
    let first = store.add_player("A").unwrap();
    store.remove_all_players().unwrap();
    assert_eq!(store.count_players().unwrap(), 0);
    assert!(store.standing_records().unwrap().is_empty());

    let second = store.add_player("A").unwrap();
    assert!(second > first);
}

#[test]
fn count_matches_list_length() {
    let mut store = MemoryStore::new();
    for name in ["A", "B", "C"] {
        store.add_player(name).unwrap();
    }
    assert_eq!(
        store.count_players().unwrap(),
        store.list_players().unwrap().len()
    );
}

#[test]
fn import_roster_registers_in_file_order() {
    let mut store = MemoryStore::new();
    let csv = "name\nAda\n Grace \nAlan\n";
    let ids = import_roster(&mut store, csv.as_bytes()).unwrap();

    assert_eq!(ids.len(), 3);
    let names: Vec<String> = store
        .list_players()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Ada", "Grace", "Alan"]);
}

#[test]
fn import_roster_with_blank_name_registers_nobody() {
    let mut store = MemoryStore::new();
    let csv = "name\nAda\n\"  \"\nAlan\n";
    assert!(matches!(
        import_roster(&mut store, csv.as_bytes()),
        Err(TournamentError::InvalidRoster(_))
    ));
    assert_eq!(store.count_players().unwrap(), 0);
}

#[test]
fn import_roster_requires_name_column() {
    let mut store = MemoryStore::new();
    let csv = "player\nAda\n";
    assert!(matches!(
        import_roster(&mut store, csv.as_bytes()),
        Err(TournamentError::InvalidRoster(_))
    ));
}

#[test]
fn export_standings_writes_header_and_rows() {
    let mut store = MemoryStore::new();
    let a = store.add_player("Ada").unwrap();
    let b = store.add_player("Bob").unwrap();
    store.record_match(b, a).unwrap();

    let mut out = Vec::new();
    export_standings(&compute_standings(&store).unwrap(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("id,name,wins,matches\n{b},Bob,1,1\n{a},Ada,0,1\n")
    );
}

#[test]
fn export_empty_standings_writes_header_only() {
    let mut out = Vec::new();
    export_standings(&Vec::new(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "id,name,wins,matches\n");
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

#[test]
fn export_write_failure_is_an_export_error() {
    let mut store = MemoryStore::new();
    store.add_player("Ada").unwrap();
    let result = export_standings(&compute_standings(&store).unwrap(), BrokenSink);
    assert!(matches!(result, Err(TournamentError::ExportFailed(_))));
}
