use std::path::{Path, PathBuf};

/// Extension probe order shared by the board and the team directory.
pub const EXTENSIONS: [&str; 5] = ["png", "svg", "jpg", "jpeg", "webp"];

/// Outcome of resolving a team's emblem: an asset file on disk, or the
/// initials glyph once every extension candidate has failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emblem {
    Asset(PathBuf),
    Initials(String),
}

impl Emblem {
    /// Short cell text for terminal rendering.
    pub fn glyph(&self) -> &str {
        match self {
            Self::Asset(_) => "◉",
            Self::Initials(text) => text.as_str(),
        }
    }
}

enum ProbeState {
    Trying(usize),
    Exhausted,
}

/// Walk the extension candidates for `<dir>/<url-encoded team>.<ext>` in
/// order; the first readable file wins. Exhaustion is the normal terminal
/// state and yields the initials fallback, never an error.
pub fn resolve_emblem(dir: &Path, team: &str) -> Emblem {
    let encoded = encode_component(team);
    let mut state = ProbeState::Trying(0);
    loop {
        match state {
            ProbeState::Trying(idx) => {
                let Some(ext) = EXTENSIONS.get(idx) else {
                    state = ProbeState::Exhausted;
                    continue;
                };
                let candidate = dir.join(format!("{encoded}.{ext}"));
                if candidate.is_file() {
                    return Emblem::Asset(candidate);
                }
                state = ProbeState::Trying(idx + 1);
            }
            ProbeState::Exhausted => return Emblem::Initials(initials(team)),
        }
    }
}

/// Up to two initials, first character of each whitespace-separated token,
/// uppercased.
pub fn initials(team: &str) -> String {
    team.split_whitespace()
        .filter_map(|token| token.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a team name the way `encodeURIComponent` does, so asset
/// names match what the original page requested from the static server.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}
