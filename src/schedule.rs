/// One scheduled match, fields taken verbatim (trimmed) from the table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub date: String,
    pub time: String,
    pub home: String,
    pub away: String,
    pub stadium: String,
    pub category: String,
    pub league: String,
    pub match_no: String,
}

/// All matches sharing one `date` string, in board order.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: String,
    pub matches: Vec<MatchRecord>,
}

const COLUMNS: [&str; 8] = [
    "date", "time", "home", "away", "stadium", "category", "league", "match_no",
];

/// Parse a comma-separated match table. First non-blank line is the header;
/// splitting is naive on purpose (no quoted fields), ragged rows fill with
/// empty strings, unknown columns are tolerated and ignored. Never fails;
/// input row order is preserved.
pub fn parse_schedule(text: &str) -> Vec<MatchRecord> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header) = lines.next() else {
        return Vec::new();
    };

    let headers: Vec<&str> = header.split(',').map(str::trim).collect();
    let index_of = |name: &str| headers.iter().position(|h| *h == name);
    let slots: Vec<Option<usize>> = COLUMNS.iter().map(|name| index_of(name)).collect();

    lines
        .map(|line| {
            let cols: Vec<&str> = line.split(',').collect();
            let field = |slot: usize| -> String {
                slots[slot]
                    .and_then(|idx| cols.get(idx))
                    .map(|c| c.trim().to_string())
                    .unwrap_or_default()
            };
            MatchRecord {
                date: field(0),
                time: field(1),
                home: field(2),
                away: field(3),
                stadium: field(4),
                category: field(5),
                league: field(6),
                match_no: field(7),
            }
        })
        .collect()
}

/// Bucket records by exact `date` equality, buckets ascending by lexical
/// date comparison (chronological for zero-padded ISO dates), matches inside
/// a bucket ascending by lexical `time`. Ties keep input row order.
pub fn group_by_date(records: &[MatchRecord]) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();
    for record in records {
        match days.iter_mut().find(|day| day.date == record.date) {
            Some(day) => day.matches.push(record.clone()),
            None => days.push(DayGroup {
                date: record.date.clone(),
                matches: vec![record.clone()],
            }),
        }
    }
    days.sort_by(|a, b| a.date.cmp(&b.date));
    for day in &mut days {
        day.matches.sort_by(|a, b| a.time.cmp(&b.time));
    }
    days
}
