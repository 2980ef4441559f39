//! Generation history.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one completed generation cycle.
///
/// Records are never modified once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRecord {
    /// When the cycle finished.
    pub timestamp: DateTime<Utc>,
    /// Number of valid phone numbers combined.
    pub phone_count: usize,
    /// Number of handles combined.
    pub handle_count: usize,
    /// Number of identifiers returned after post-processing.
    pub vpas_count: usize,
}

impl GenerationRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn now(phone_count: usize, handle_count: usize, vpas_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            phone_count,
            handle_count,
            vpas_count,
        }
    }
}

/// A record together with its 1-based position in the log.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// 1-based position, oldest first.
    pub number: usize,
    /// The record.
    #[serde(flatten)]
    pub record: GenerationRecord,
}

/// Append-only log of generation cycles for one session.
///
/// Keeps at most `limit` records; the oldest are dropped first. Entry numbers
/// keep counting across dropped records.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: Vec<GenerationRecord>,
    limit: usize,
    dropped: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty, unbounded log.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Create an empty log keeping at most `limit` records.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit,
            dropped: 0,
        }
    }

    /// Append a record, dropping the oldest when over the limit.
    pub fn append(&mut self, record: GenerationRecord) {
        self.records.push(record);
        if self.records.len() > self.limit {
            let excess = self.records.len() - self.limit;
            self.records.drain(..excess);
            self.dropped += excess;
        }
    }

    /// Drop every record and restart numbering.
    pub fn clear(&mut self) {
        self.records.clear();
        self.dropped = 0;
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// The `limit` most recent records, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        self.records
            .iter()
            .enumerate()
            .rev()
            .take(limit)
            .map(|(i, record)| HistoryEntry {
                number: self.dropped + i + 1,
                record: record.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_clear() {
        let mut log = HistoryLog::new();
        log.append(GenerationRecord::now(2, 3, 6));
        log.append(GenerationRecord::now(1, 1, 1));
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].vpas_count, 6);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_recent_newest_first() {
        let mut log = HistoryLog::new();
        for i in 1..=7 {
            log.append(GenerationRecord::now(i, 1, i));
        }

        let recent = log.recent(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].number, 7);
        assert_eq!(recent[0].record.phone_count, 7);
        assert_eq!(recent[4].number, 3);

        assert_eq!(log.recent(100).len(), 7);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut log = HistoryLog::with_limit(3);
        for i in 1..=5 {
            log.append(GenerationRecord::now(i, 1, i));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.records()[0].phone_count, 3);

        let recent = log.recent(5);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].number, 5);
        assert_eq!(recent[2].number, 3);

        log.clear();
        log.append(GenerationRecord::now(1, 1, 1));
        assert_eq!(log.recent(1)[0].number, 1);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = HistoryEntry {
            number: 1,
            record: GenerationRecord::now(2, 3, 6),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["number"], 1);
        assert_eq!(value["vpas_count"], 6);
        assert!(value["timestamp"].is_string());
    }
}
