use std::collections::HashMap;

use matchday_terminal::board::{board_lines, card_text};
use matchday_terminal::date_fmt::format_match_date;
use matchday_terminal::schedule::{group_by_date, MatchRecord};
use matchday_terminal::state::AppState;
use ratatui::text::Line;

fn record(date: &str, time: &str, home: &str, away: &str, stadium: &str) -> MatchRecord {
    MatchRecord {
        date: date.to_string(),
        time: time.to_string(),
        home: home.to_string(),
        away: away.to_string(),
        stadium: stadium.to_string(),
        category: "성인".to_string(),
        league: "K리그2".to_string(),
        match_no: "7".to_string(),
    }
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn days_ascend_and_times_ascend_within_a_day() {
    let records = vec![
        record("2024-03-09", "14:00", "A", "B", "S"),
        record("2024-03-05", "18:00", "C", "D", "S"),
        record("2024-03-05", "16:00", "E", "F", "S"),
    ];
    let days = group_by_date(&records);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, "2024-03-05");
    assert_eq!(days[1].date, "2024-03-09");
    assert_eq!(days[0].matches[0].time, "16:00");
    assert_eq!(days[0].matches[1].time, "18:00");
}

#[test]
fn equal_times_keep_input_row_order() {
    let records = vec![
        record("2024-03-05", "16:00", "First", "X", "S"),
        record("2024-03-05", "16:00", "Second", "X", "S"),
    ];
    let days = group_by_date(&records);
    assert_eq!(days[0].matches[0].home, "First");
    assert_eq!(days[0].matches[1].home, "Second");
}

#[test]
fn formats_iso_dates_in_korean_long_form() {
    assert_eq!(format_match_date("2024-03-05"), "2024년 3월 5일 (화)");
    assert_eq!(format_match_date("2024-12-25"), "2024년 12월 25일 (수)");
}

#[test]
fn malformed_dates_come_back_unchanged() {
    assert_eq!(format_match_date("not-a-date"), "not-a-date");
    assert_eq!(format_match_date(""), "");
    // Out-of-range calendar values are a parse failure, not a rollover.
    assert_eq!(format_match_date("2024-13-40"), "2024-13-40");
    assert_eq!(format_match_date("2024-03-05-extra"), "2024-03-05-extra");
}

#[test]
fn card_text_covers_meta_and_both_teams() {
    let r = record("2024-03-05", "18:00", "김포FC", "수원FC", "김포솔터축구장");
    let text = card_text(&r);
    assert!(text.contains("18:00"));
    assert!(text.contains("김포솔터축구장"));
    assert!(text.contains("성인"));
    assert!(text.contains("K리그2"));
    assert!(text.contains("7"));
    assert!(text.contains("김포FC vs 수원FC"));
}

#[test]
fn board_renders_sections_in_date_order_with_uniform_headers() {
    let mut state = AppState::new();
    state.set_schedule(
        vec![
            record("2024-03-09", "14:00", "A", "B", "S"),
            record("2024-03-05", "18:00", "C", "D", "S"),
        ],
        HashMap::new(),
    );

    let view = board_lines(&state);
    let texts: Vec<String> = view.lines.iter().map(line_text).collect();
    let first_header = texts
        .iter()
        .position(|t| t == "2024년 3월 5일 (화)")
        .expect("first day header");
    let second_header = texts
        .iter()
        .position(|t| t == "2024년 3월 9일 (토)")
        .expect("second day header");
    assert!(first_header < second_header);
}

#[test]
fn hidden_cards_are_skipped_but_day_headers_remain() {
    let mut state = AppState::new();
    state.set_schedule(
        vec![
            record("2024-03-05", "18:00", "Alpha", "Beta", "S"),
            record("2024-03-09", "14:00", "Gamma", "Delta", "S"),
        ],
        HashMap::new(),
    );

    state.filter_by_team("Gamma");
    let view = board_lines(&state);
    let texts: Vec<String> = view.lines.iter().map(line_text).collect();

    assert!(texts.iter().any(|t| t == "2024년 3월 5일 (화)"));
    assert!(texts.iter().any(|t| t == "2024년 3월 9일 (토)"));
    assert!(!texts.iter().any(|t| t.contains("Alpha")));
    assert!(texts.iter().any(|t| t.contains("Gamma")));

    // First visible card sits under the second day header.
    let first = view.first_visible_line.expect("one card is visible");
    assert!(texts[first].contains("14:00"));
}

#[test]
fn filtering_everything_away_leaves_no_first_visible_card() {
    let mut state = AppState::new();
    state.set_schedule(
        vec![record("2024-03-05", "18:00", "Alpha", "Beta", "S")],
        HashMap::new(),
    );
    state.filter_by_team("no-such-team");
    let view = board_lines(&state);
    assert!(view.first_visible_line.is_none());
}
