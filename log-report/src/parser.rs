use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::LogEntry;

// Structured line: "2024-03-01 14:22 +00:00: GET /api/users: 200".
// The request field and the status field are each optional; trailing
// content after the captured prefix is ignored. Bare-word lines without a
// timestamp never produce an entry.
static STRUCTURED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<ts>\d{4}-\d{2}-\d{2} \d{2}:\d{2} [+-]\d{2}:\d{2})",
        r"(?::\s*(?P<method>\w+)(?:\s+(?P<endpoint>[^\s:]+))?)?",
        r"(?:.*?:\s*(?P<status>\d{3})\b)?",
    ))
    .expect("structured line pattern")
});

// Timestamp format for log entries: 2024-03-01 14:22 +00:00
const TS_FORMAT: &str = "%Y-%m-%d %H:%M %:z";

/// Parses one line into an entry, or `None` when the line is malformed.
///
/// Malformed covers a failed pattern match, a missing timestamp, and a
/// timestamp that matched the pattern but is not a real calendar date.
/// Skipped lines are expected noise, not errors.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let caps = STRUCTURED.captures(line)?;
    let timestamp = DateTime::parse_from_str(caps.name("ts")?.as_str(), TS_FORMAT)
        .ok()?
        .with_timezone(&Utc);
    let endpoint = caps
        .name("endpoint")
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());
    let status = caps.name("status").and_then(|m| m.as_str().parse().ok());
    Some(LogEntry {
        timestamp,
        endpoint,
        status,
    })
}
