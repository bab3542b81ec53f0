//! Cell text for tables and cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MISSING: &str = "N/A";

/// Calendar date portion of an ISO date or timestamp, `N/A` when absent.
pub fn display_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return MISSING.to_owned();
    };
    let date = raw.split(['T', ' ']).next().unwrap_or(raw);
    if is_iso_date(date) { date.to_owned() } else { raw.to_owned() }
}

fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// `@handle`, or `@N/A` for a blank username.
pub fn handle(username: &str) -> String {
    if username.trim().is_empty() { format!("@{MISSING}") } else { format!("@{username}") }
}

/// Team badge text for a user's `team_id`.
pub fn team_label(team_id: Option<i64>) -> String {
    team_id.map_or_else(|| "No Team".to_owned(), |id| format!("Team {id}"))
}

/// Fallback-aware display name.
pub fn display_name(name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| "Unknown User".to_owned(), str::to_owned)
}
