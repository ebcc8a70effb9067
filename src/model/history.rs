//! Bounded log of completed calculations.

use serde::Serialize;
use std::fmt;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// One completed calculation, e.g. `5 + 3` = `8`.
///
/// Created only by a successful equals; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    expression_text: String,
    result_text: String,
}

impl HistoryEntry {
    /// Create an entry from already formatted texts.
    pub fn new(expression_text: impl Into<String>, result_text: impl Into<String>) -> Self {
        Self {
            expression_text: expression_text.into(),
            result_text: result_text.into(),
        }
    }

    /// Expression that was evaluated.
    pub fn expression_text(&self) -> &str {
        &self.expression_text
    }

    /// Formatted result.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression_text, self.result_text)
    }
}

/// Append-only log keeping the newest `capacity` entries, newest last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest ones beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{} + 0", n), n.to_string())
    }

    #[test]
    fn new_log_is_empty_with_default_capacity() {
        let log = HistoryLog::default();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 5);
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut log = HistoryLog::default();
        log.push(entry(1));
        log.push(entry(2));
        let results: Vec<&str> = log.entries().iter().map(|e| e.result_text()).collect();
        assert_eq!(results, vec!["1", "2"]);
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let mut log = HistoryLog::default();
        for n in 1..=7 {
            log.push(entry(n));
        }
        assert_eq!(log.len(), 5);
        let results: Vec<&str> = log.entries().iter().map(|e| e.result_text()).collect();
        assert_eq!(results, vec!["3", "4", "5", "6", "7"]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut log = HistoryLog::with_capacity(0);
        log.push(entry(1));
        log.push(entry(2));
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.entries(), &[entry(2)]);
    }

    #[test]
    fn entry_display_joins_expression_and_result() {
        let e = HistoryEntry::new("5 + 3", "8");
        assert_eq!(e.to_string(), "5 + 3 = 8");
    }
}
