use chrono::{Datelike, NaiveDate, Weekday};

// ko-KR short weekday labels, Monday first.
const WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Format a `yyyy-mm-dd` date as the Korean long form with short weekday,
/// e.g. `2024년 3월 5일 (화)`. Any malformed input comes back unchanged.
pub fn format_match_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => format!(
            "{}년 {}월 {}일 ({})",
            date.year(),
            date.month(),
            date.day(),
            weekday_label(date.weekday())
        ),
        None => raw.to_string(),
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn weekday_label(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize]
}
