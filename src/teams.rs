use std::collections::HashMap;

use crate::schedule::MatchRecord;

/// A team name plus how many times it appears across the schedule
/// (home and away occurrences both count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    pub name: String,
    pub count: usize,
}

/// Derive the ranked team directory from the record sequence: descending by
/// count, ties broken by ascending name. Blank team fields are skipped.
pub fn team_entries(records: &[MatchRecord]) -> Vec<TeamEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        for side in [record.home.trim(), record.away.trim()] {
            if !side.is_empty() {
                *counts.entry(side).or_insert(0) += 1;
            }
        }
    }

    let mut entries: Vec<TeamEntry> = counts
        .into_iter()
        .map(|(name, count)| TeamEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}

/// Live-search predicate for the sidebar: case-insensitive substring match.
/// An empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query)
}
