use std::collections::HashMap;

use derive_more::Display;

use crate::{
    invariants::{Endpoint, Minute},
    models::LogEntry,
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    #[display("Not found")]
    NotFound,
    #[display("Server Error")]
    ServerError,
    #[display("OK")]
    Ok,
}

impl StatusCategory {
    // 404 is checked before 500; everything else, success or not, is OK.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            500 => Self::ServerError,
            _ => Self::Ok,
        }
    }
}

/// Counts entries per endpoint token. Entries without an endpoint are
/// excluded.
pub fn endpoint_counts(entries: &[LogEntry]) -> HashMap<Endpoint, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        if let Some(endpoint) = entry.endpoint.as_deref() {
            *counts.entry(Endpoint::from(endpoint)).or_default() += 1;
        }
    }
    counts
}

/// Counts entries per UTC minute bucket. Every entry lands in exactly one
/// bucket.
pub fn calls_per_minute(entries: &[LogEntry]) -> HashMap<Minute, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(Minute::from(entry.timestamp)).or_default() += 1;
    }
    counts
}

/// Counts entries per coarse status category. Entries without a status are
/// excluded.
pub fn calls_by_status(entries: &[LogEntry]) -> HashMap<StatusCategory, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        if let Some(code) = entry.status {
            *counts.entry(StatusCategory::from_status(code)).or_default() += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use chrono::{TimeZone, Utc};

    fn entry(minute: u32, endpoint: Option<&str>, status: Option<u16>) -> LogEntry {
        LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 14, minute, 0).unwrap(),
            endpoint: endpoint.map(Into::into),
            status,
        }
    }

    #[test]
    fn endpoint_counts_skips_missing_endpoints() {
        let entries = vec![
            entry(22, Some("/api/users"), Some(200)),
            entry(22, None, Some(200)),
            entry(23, Some("/api/users"), None),
        ];

        let counts = endpoint_counts(&entries);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&Endpoint::from("/api/users")), Some(&2));
    }

    #[test]
    fn per_minute_counts_every_entry_once() {
        let entries = vec![
            entry(22, Some("/a"), Some(200)),
            entry(22, None, None),
            entry(23, Some("/b"), Some(404)),
        ];

        let counts = calls_per_minute(&entries);
        let total: usize = counts.values().sum();
        assert_that!(total).is_equal_to(entries.len());
        assert_eq!(
            counts.get(&Minute::from(entries[0].timestamp)),
            Some(&2)
        );
    }

    #[test]
    fn status_category_precedence() {
        assert_eq!(StatusCategory::from_status(404), StatusCategory::NotFound);
        assert_eq!(StatusCategory::from_status(500), StatusCategory::ServerError);
        for code in [200, 301, 403, 503, 999] {
            assert_eq!(StatusCategory::from_status(code), StatusCategory::Ok);
        }
    }

    #[test]
    fn status_category_labels() {
        assert_eq!(StatusCategory::NotFound.to_string(), "Not found");
        assert_eq!(StatusCategory::ServerError.to_string(), "Server Error");
        assert_eq!(StatusCategory::Ok.to_string(), "OK");
    }

    #[test]
    fn calls_by_status_skips_missing_status() {
        let entries = vec![
            entry(22, Some("/a"), Some(200)),
            entry(22, Some("/b"), None),
            entry(23, None, Some(404)),
            entry(24, None, Some(500)),
        ];

        let counts = calls_by_status(&entries);
        assert_eq!(counts.get(&StatusCategory::Ok), Some(&1));
        assert_eq!(counts.get(&StatusCategory::NotFound), Some(&1));
        assert_eq!(counts.get(&StatusCategory::ServerError), Some(&1));
        let total: usize = counts.values().sum();
        assert_that!(total).is_in_range(0..=entries.len());
    }

    #[test]
    fn aggregators_are_idempotent() {
        let entries = vec![
            entry(22, Some("/api/users"), Some(200)),
            entry(22, Some("/api/orders"), Some(404)),
            entry(23, Some("/api/users"), Some(500)),
        ];

        assert_eq!(endpoint_counts(&entries), endpoint_counts(&entries));
        assert_eq!(calls_per_minute(&entries), calls_per_minute(&entries));
        assert_eq!(calls_by_status(&entries), calls_by_status(&entries));
    }
}
