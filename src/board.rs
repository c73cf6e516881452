use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::date_fmt::format_match_date;
use crate::emblem;
use crate::schedule::MatchRecord;
use crate::state::AppState;

/// The fully built board text plus the offset used to bring the first
/// visible card into view after filtering.
pub struct BoardView {
    pub lines: Vec<Line<'static>>,
    pub first_visible_line: Option<usize>,
}

/// Metadata line of one card: time, stadium, category, league, match number.
pub fn meta_text(record: &MatchRecord) -> String {
    [
        record.time.as_str(),
        record.stadium.as_str(),
        record.category.as_str(),
        record.league.as_str(),
        record.match_no.as_str(),
    ]
    .join(" · ")
}

/// Combined visible text of one card, the haystack for team filtering.
pub fn card_text(record: &MatchRecord) -> String {
    format!(
        "{} {} vs {}",
        meta_text(record),
        record.home,
        record.away
    )
}

/// Build the day/card structure: one uniform date header per day, then one
/// card per match that survives the active filter. Day headers stay even
/// when every card beneath them is hidden, matching how the original page
/// only toggled card visibility.
pub fn board_lines(state: &AppState) -> BoardView {
    if state.loading {
        return message_view("일정 데이터를 불러오는 중...");
    }
    if let Some(message) = &state.load_error {
        return message_view(message);
    }
    if state.days.is_empty() {
        return message_view("표시할 경기가 없습니다");
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut first_visible_line = None;

    for (day_idx, day) in state.days.iter().enumerate() {
        lines.push(date_header_line(&day.date));
        lines.push(Line::default());
        for (match_idx, record) in day.matches.iter().enumerate() {
            if state.is_card_hidden(day_idx, match_idx) {
                continue;
            }
            if first_visible_line.is_none() {
                first_visible_line = Some(lines.len());
            }
            lines.push(meta_line(record));
            lines.push(teams_line(state, record));
            lines.push(Line::default());
        }
    }

    BoardView {
        lines,
        first_visible_line,
    }
}

fn message_view(message: &str) -> BoardView {
    BoardView {
        lines: vec![Line::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )],
        first_visible_line: None,
    }
}

fn date_header_line(date: &str) -> Line<'static> {
    Line::styled(
        format_match_date(date),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn meta_line(record: &MatchRecord) -> Line<'static> {
    Line::styled(
        format!("  {}", meta_text(record)),
        Style::default().fg(Color::DarkGray),
    )
}

fn teams_line(state: &AppState, record: &MatchRecord) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    push_team_spans(&mut spans, state, &record.home);
    spans.push(Span::styled(
        "  vs  ",
        Style::default().fg(Color::DarkGray),
    ));
    push_team_spans(&mut spans, state, &record.away);
    Line::from(spans)
}

fn push_team_spans(spans: &mut Vec<Span<'static>>, state: &AppState, name: &str) {
    let glyph = state
        .emblems
        .get(name)
        .map(|e| e.glyph().to_string())
        .unwrap_or_else(|| emblem::initials(name));
    spans.push(Span::styled(glyph, Style::default().fg(Color::Green)));
    spans.push(Span::raw(" "));

    // Highlight treatment is substring containment, not an exact match.
    let highlighted = !state.highlight_club.is_empty() && name.contains(&state.highlight_club);
    let style = if highlighted {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    spans.push(Span::styled(name.to_string(), style));
}
