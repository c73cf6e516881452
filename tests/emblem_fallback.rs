use std::path::PathBuf;

use matchday_terminal::emblem::{encode_component, initials, resolve_emblem, Emblem};
use matchday_terminal::feed::resolve_emblems;
use matchday_terminal::schedule::MatchRecord;

fn emblem_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("emblems");
    path
}

#[test]
fn earlier_extensions_win() {
    // Tigers has both .png and .svg on disk; png is probed first.
    match resolve_emblem(&emblem_dir(), "Tigers") {
        Emblem::Asset(path) => assert!(path.ends_with("Tigers.png")),
        Emblem::Initials(_) => panic!("expected an asset"),
    }
}

#[test]
fn later_extensions_are_reached() {
    match resolve_emblem(&emblem_dir(), "Vipers") {
        Emblem::Asset(path) => assert!(path.ends_with("Vipers.webp")),
        Emblem::Initials(_) => panic!("expected an asset"),
    }
}

#[test]
fn asset_names_are_url_encoded() {
    // The fixture file is literally named `FC%20Alpha.png`.
    match resolve_emblem(&emblem_dir(), "FC Alpha") {
        Emblem::Asset(path) => assert!(path.ends_with("FC%20Alpha.png")),
        Emblem::Initials(_) => panic!("expected an asset"),
    }
}

#[test]
fn exhausted_chain_falls_back_to_initials() {
    let emblem = resolve_emblem(&emblem_dir(), "ghost united club");
    assert_eq!(emblem, Emblem::Initials("GU".to_string()));
}

#[test]
fn initials_take_two_uppercased_token_heads() {
    assert_eq!(initials("Gimpo"), "G");
    assert_eq!(initials("gimpo citizen fc"), "GC");
    assert_eq!(initials("김포 시민"), "김시");
    assert_eq!(initials("  "), "");
}

#[test]
fn encoding_matches_encode_uri_component() {
    assert_eq!(encode_component("Tigers"), "Tigers");
    assert_eq!(encode_component("FC Alpha"), "FC%20Alpha");
    assert_eq!(encode_component("a+b&c"), "a%2Bb%26c");
    assert_eq!(encode_component("A-Z_a.z!~*'()"), "A-Z_a.z!~*'()");
    assert_eq!(encode_component("김포"), "%EA%B9%80%ED%8F%AC");
}

#[test]
fn one_resolution_per_distinct_team() {
    let record = |home: &str, away: &str| MatchRecord {
        date: "2024-03-05".to_string(),
        time: "18:00".to_string(),
        home: home.to_string(),
        away: away.to_string(),
        stadium: String::new(),
        category: String::new(),
        league: String::new(),
        match_no: String::new(),
    };
    let records = vec![
        record("Tigers", "Vipers"),
        record("Vipers", "Tigers"),
        record("", "Tigers"),
    ];
    let emblems = resolve_emblems(&emblem_dir(), &records);
    assert_eq!(emblems.len(), 2);
    assert!(matches!(emblems.get("Tigers"), Some(Emblem::Asset(_))));
    assert!(matches!(emblems.get("Vipers"), Some(Emblem::Asset(_))));
}
