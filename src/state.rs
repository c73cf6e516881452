use std::collections::{HashMap, HashSet, VecDeque};
use std::env;

use crate::board::card_text;
use crate::emblem::Emblem;
use crate::schedule::{group_by_date, DayGroup, MatchRecord};
use crate::teams::{self, TeamEntry};

/// Fixed diagnostic shown in the board area when the schedule cannot be
/// loaded. Matches the message of the original page.
pub const LOAD_FAILED_MESSAGE: &str =
    "match.csv를 불러오지 못했습니다. 서버로 정적 파일을 서빙하고 있는지 확인하세요.";

pub const DEFAULT_HIGHLIGHT_CLUB: &str = "김포";

pub struct AppState {
    pub loading: bool,
    pub load_error: Option<String>,
    pub records: Vec<MatchRecord>,
    pub days: Vec<DayGroup>,
    pub teams: Vec<TeamEntry>,
    pub emblems: HashMap<String, Emblem>,
    pub highlight_club: String,
    pub team_cursor: usize,
    pub selected_team: Option<String>,
    pub team_search: String,
    pub search_active: bool,
    hidden_cards: HashSet<(usize, usize)>,
    pub board_scroll: u16,
    pub export: ExportState,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let highlight_club =
            env::var("HIGHLIGHT_CLUB").unwrap_or_else(|_| DEFAULT_HIGHLIGHT_CLUB.to_string());
        Self {
            loading: true,
            load_error: None,
            records: Vec::new(),
            days: Vec::new(),
            teams: Vec::new(),
            emblems: HashMap::new(),
            highlight_club,
            team_cursor: 0,
            selected_team: None,
            team_search: String::new(),
            search_active: false,
            hidden_cards: HashSet::new(),
            board_scroll: 0,
            export: ExportState::new(),
            logs: VecDeque::new(),
            help_overlay: false,
        }
    }

    /// Install a freshly parsed schedule. Derivations (day groups, team
    /// directory) are rebuilt here; any active filter is discarded.
    pub fn set_schedule(&mut self, records: Vec<MatchRecord>, emblems: HashMap<String, Emblem>) {
        self.days = group_by_date(&records);
        self.teams = teams::team_entries(&records);
        self.records = records;
        self.emblems = emblems;
        self.loading = false;
        self.load_error = None;
        self.selected_team = None;
        self.hidden_cards.clear();
        self.board_scroll = 0;
        self.clamp_team_cursor();
    }

    /// Sidebar entries that survive the live search, as indices into
    /// `self.teams` (ranking order preserved).
    pub fn visible_team_indices(&self) -> Vec<usize> {
        self.teams
            .iter()
            .enumerate()
            .filter(|(_, entry)| teams::matches_query(&entry.name, &self.team_search))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn cursor_team(&self) -> Option<&TeamEntry> {
        let visible = self.visible_team_indices();
        visible
            .get(self.team_cursor)
            .and_then(|idx| self.teams.get(*idx))
    }

    pub fn select_next_team(&mut self) {
        let total = self.visible_team_indices().len();
        if total == 0 {
            self.team_cursor = 0;
            return;
        }
        self.team_cursor = (self.team_cursor + 1) % total;
    }

    pub fn select_prev_team(&mut self) {
        let total = self.visible_team_indices().len();
        if total == 0 {
            self.team_cursor = 0;
            return;
        }
        if self.team_cursor == 0 {
            self.team_cursor = total - 1;
        } else {
            self.team_cursor -= 1;
        }
    }

    pub fn clamp_team_cursor(&mut self) {
        let total = self.visible_team_indices().len();
        if total == 0 {
            self.team_cursor = 0;
        } else if self.team_cursor >= total {
            self.team_cursor = total - 1;
        }
    }

    /// Mark the team as selected and hide every card whose combined visible
    /// text does not contain the team name. Substring containment over the
    /// whole card text, so stadium or category mentions also keep a card
    /// visible.
    pub fn filter_by_team(&mut self, team: &str) {
        self.selected_team = Some(team.to_string());
        self.hidden_cards.clear();
        for (day_idx, day) in self.days.iter().enumerate() {
            for (match_idx, record) in day.matches.iter().enumerate() {
                if !card_text(record).contains(team) {
                    self.hidden_cards.insert((day_idx, match_idx));
                }
            }
        }
    }

    /// Clear the selection and unhide every card the filter hid.
    pub fn reset_filter(&mut self) {
        self.selected_team = None;
        self.hidden_cards.clear();
    }

    pub fn is_card_hidden(&self, day_idx: usize, match_idx: usize) -> bool {
        self.hidden_cards.contains(&(day_idx, match_idx))
    }

    pub fn visible_card_count(&self) -> usize {
        self.days
            .iter()
            .enumerate()
            .map(|(day_idx, day)| {
                (0..day.matches.len())
                    .filter(|match_idx| !self.is_card_hidden(day_idx, *match_idx))
                    .count()
            })
            .sum()
    }

    pub fn total_card_count(&self) -> usize {
        self.days.iter().map(|day| day.matches.len()).sum()
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn maybe_clear_export(&mut self, now: std::time::Instant) {
        self.export.clear_if_done_for(now, 8);
    }
}

pub struct ExportState {
    pub active: bool,
    pub done: bool,
    pub path: Option<String>,
    pub message: String,
    pub last_updated: Option<std::time::Instant>,
}

impl Default for ExportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportState {
    pub fn new() -> Self {
        Self {
            active: false,
            done: false,
            path: None,
            message: String::new(),
            last_updated: None,
        }
    }

    pub fn clear_if_done_for(&mut self, now: std::time::Instant, keep_secs: u64) {
        if !self.active || !self.done {
            return;
        }
        let Some(last) = self.last_updated else {
            return;
        };
        if now.duration_since(last).as_secs() >= keep_secs {
            *self = Self::new();
        }
    }
}

#[derive(Debug)]
pub enum Delta {
    SetSchedule {
        records: Vec<MatchRecord>,
        emblems: HashMap<String, Emblem>,
    },
    LoadFailed(String),
    Log(String),
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetSchedule { records, emblems } => {
            state.set_schedule(records, emblems);
        }
        Delta::LoadFailed(message) => {
            state.loading = false;
            state.load_error = Some(message);
        }
        Delta::Log(message) => state.push_log(message),
    }
}
