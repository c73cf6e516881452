use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use crate::emblem::{self, Emblem};
use crate::schedule::{self, MatchRecord};
use crate::source;
use crate::state::{Delta, LOAD_FAILED_MESSAGE};

pub const DEFAULT_EMBLEM_DIR: &str = "emblems";

/// Spawn the one-shot schedule loader: fetch, parse, resolve an emblem per
/// distinct team, then hand everything to the UI as a single delta. A
/// failed load is terminal for this run; no retry is attempted.
pub fn spawn_schedule_feed(tx: Sender<Delta>) {
    thread::spawn(move || {
        let src =
            env::var("SCHEDULE_SOURCE").unwrap_or_else(|_| source::DEFAULT_SOURCE.to_string());
        let emblem_dir = PathBuf::from(
            env::var("EMBLEM_DIR").unwrap_or_else(|_| DEFAULT_EMBLEM_DIR.to_string()),
        );

        match source::load_schedule_text(&src) {
            Ok(text) => {
                let records = schedule::parse_schedule(&text);
                let emblems = resolve_emblems(&emblem_dir, &records);
                let _ = tx.send(Delta::Log(format!(
                    "[INFO] Loaded {} matches from {src}",
                    records.len()
                )));
                let _ = tx.send(Delta::SetSchedule { records, emblems });
            }
            Err(err) => {
                let _ = tx.send(Delta::Log(format!("[WARN] Schedule load error: {err:#}")));
                let _ = tx.send(Delta::LoadFailed(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
    });
}

/// One resolution per distinct team name; the board and the team directory
/// share the result.
pub fn resolve_emblems(dir: &Path, records: &[MatchRecord]) -> HashMap<String, Emblem> {
    let mut emblems = HashMap::new();
    for record in records {
        for side in [record.home.trim(), record.away.trim()] {
            if side.is_empty() || emblems.contains_key(side) {
                continue;
            }
            emblems.insert(side.to_string(), emblem::resolve_emblem(dir, side));
        }
    }
    emblems
}
