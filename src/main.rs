use std::env;
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use matchday_terminal::board;
use matchday_terminal::emblem;
use matchday_terminal::export;
use matchday_terminal::feed;
use matchday_terminal::state::{self, apply_delta, AppState};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            self.on_search_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('/') => self.state.search_active = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_team(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_team(),
            KeyCode::Enter => self.apply_team_filter(),
            KeyCode::Char('r') => {
                self.state.reset_filter();
                self.state.board_scroll = 0;
                self.state.push_log("[INFO] Filter reset");
            }
            KeyCode::Char('J') | KeyCode::PageDown => {
                self.state.board_scroll = self.state.board_scroll.saturating_add(3);
            }
            KeyCode::Char('K') | KeyCode::PageUp => {
                self.state.board_scroll = self.state.board_scroll.saturating_sub(3);
            }
            KeyCode::Char('p') => self.export_schedule(),
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.search_active = false;
                self.state.team_search.clear();
                self.state.team_cursor = 0;
            }
            KeyCode::Enter => self.state.search_active = false,
            KeyCode::Backspace => {
                self.state.team_search.pop();
                self.state.team_cursor = 0;
            }
            KeyCode::Char(c) => {
                self.state.team_search.push(c);
                self.state.team_cursor = 0;
            }
            _ => {}
        }
    }

    fn apply_team_filter(&mut self) {
        let Some(team) = self.state.cursor_team().map(|entry| entry.name.clone()) else {
            self.state.push_log("[INFO] No team under cursor");
            return;
        };
        self.state.filter_by_team(&team);

        // Bring the first card that survived the filter into view.
        let view = board::board_lines(&self.state);
        let first = view.first_visible_line.unwrap_or(0);
        self.state.board_scroll = u16::try_from(first).unwrap_or(u16::MAX);

        self.state.push_log(format!(
            "[INFO] Filter: {team} ({}/{} cards visible)",
            self.state.visible_card_count(),
            self.state.total_card_count()
        ));
    }

    fn export_schedule(&mut self) {
        if self.state.days.is_empty() {
            self.state.push_log("[INFO] Nothing to export yet");
            return;
        }
        let path =
            env::var("EXPORT_PATH").unwrap_or_else(|_| export::DEFAULT_EXPORT_PATH.to_string());
        let now = Instant::now();
        match export::export_schedule(Path::new(&path), &self.state.days) {
            Ok(report) => {
                self.state.export.active = true;
                self.state.export.done = true;
                self.state.export.path = Some(path.clone());
                self.state.export.message =
                    format!("Exported {} matches to {path}", report.matches);
                self.state.export.last_updated = Some(now);
                self.state.push_log(format!(
                    "[INFO] Exported {} matches / {} days to {path}",
                    report.matches, report.days
                ));
            }
            Err(err) => {
                self.state.export.active = true;
                self.state.export.done = true;
                self.state.export.message = "Export failed".to_string();
                self.state.export.last_updated = Some(now);
                self.state.push_log(format!("[WARN] Export error: {err:#}"));
            }
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    feed::spawn_schedule_feed(tx);

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<state::Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        app.state.maybe_clear_export(Instant::now());

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(chunks[1]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(body[0]);

    render_team_panel(frame, panes[0], &app.state);
    render_board(frame, panes[1], &app.state);

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, body[1]);

    let footer = Paragraph::new(footer_text(&app.state))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let filter = state.selected_team.as_deref().unwrap_or("-");
    let line1 = format!(
        "  __  MATCHDAY BOARD | {} matches | {} teams | Filter: {}",
        state.records.len(),
        state.teams.len(),
        filter
    );
    let line2 = " (__)".to_string();
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    if state.export.active && !state.export.message.is_empty() {
        return state.export.message.clone();
    }
    if state.search_active {
        return "Type to narrow team list | Enter Keep | Esc Clear".to_string();
    }
    "j/k/↑/↓ Teams | Enter Filter | r Reset | / Search | J/K/PgUp/PgDn Scroll | p Export | ? Help | q Quit"
        .to_string()
}

fn render_team_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let search_title = if state.search_active {
        "Search (typing)"
    } else {
        "Search (/)"
    };
    let search_style = if state.search_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search = Paragraph::new(state.team_search.as_str())
        .style(search_style)
        .block(Block::default().title(search_title).borders(Borders::ALL));
    frame.render_widget(search, sections[0]);

    let list_block = Block::default().title("Teams").borders(Borders::ALL);
    let inner = list_block.inner(sections[1]);
    frame.render_widget(list_block, sections[1]);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let visible = state.visible_team_indices();
    if visible.is_empty() {
        let empty = Paragraph::new("팀 없음").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let (start, end) = visible_range(state.team_cursor, visible.len(), inner.height as usize);
    let mut lines: Vec<Line> = Vec::new();
    for pos in start..end {
        let entry = &state.teams[visible[pos]];
        let at_cursor = pos == state.team_cursor;
        let selected = state.selected_team.as_deref() == Some(entry.name.as_str());

        let glyph = state
            .emblems
            .get(&entry.name)
            .map(|e| e.glyph().to_string())
            .unwrap_or_else(|| emblem::initials(&entry.name));

        let mut style = Style::default();
        if selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if at_cursor {
            style = style.bg(Color::DarkGray);
        }

        let prefix = if at_cursor { "> " } else { "  " };
        lines.push(Line::styled(
            format!("{prefix}{glyph} {}  {}경기", entry.name, entry.count),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_board(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Match Board").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let view = board::board_lines(state);
    let total = view.lines.len();
    let visible = inner.height as usize;
    let max_start = total.saturating_sub(visible);
    let start = (state.board_scroll as usize).min(max_start);

    let paragraph = Paragraph::new(view.lines).scroll((start as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn console_text(state: &AppState) -> String {
    state
        .logs
        .back()
        .cloned()
        .unwrap_or_else(|| "No messages yet".to_string())
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Matchday Terminal - Help",
        "",
        "Global:",
        "  p            Export schedule (xlsx)",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Teams:",
        "  j/k or ↑/↓   Move cursor",
        "  Enter        Filter board by team",
        "  r            Reset filter",
        "  /            Live search (Esc clears)",
        "",
        "Board:",
        "  J/K          Scroll",
        "  PgUp/PgDn    Scroll",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
