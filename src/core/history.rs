//! Conversion history
//!
//! Append-only in-memory log of successful conversions. Single-owner: the
//! engine is single-threaded by contract, so whoever owns the history is the
//! one writer and mutation takes `&mut self`. No persistence, no size cap.

use tracing::debug;

use crate::shared::types::{ConversionRecord, QuantityKind};

/// Ordered record of past conversions, insertion order = chronological order
#[derive(Debug, Default)]
pub struct ConversionHistory {
    records: Vec<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Capture the current wall-clock time and append a record.
    ///
    /// No deduplication: converting the same value twice logs twice.
    pub fn record(
        &mut self,
        kind: QuantityKind,
        value: f64,
        from_unit: &str,
        to_unit: &str,
        result: f64,
    ) -> ConversionRecord {
        let record = ConversionRecord::new(kind, value, from_unit, to_unit, result);
        debug!(id = %record.id, %kind, from_unit, to_unit, "recorded conversion");
        self.records.push(record.clone());
        record
    }

    /// The log in reverse-chronological order (most recent first).
    ///
    /// Re-derives the view on every call; the underlying log is untouched.
    pub fn list(&self) -> Vec<ConversionRecord> {
        self.records.iter().rev().cloned().collect()
    }

    /// Empty the log. Subsequent `list()` calls return nothing until new
    /// records are appended.
    pub fn clear(&mut self) {
        debug!(dropped = self.records.len(), "cleared history");
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_list() {
        let mut history = ConversionHistory::new();

        history.record(QuantityKind::Length, 1.0, "km", "m", 1000.0);
        history.record(QuantityKind::Weight, 1.0, "kg", "g", 1000.0);

        let items = history.list();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].from_unit, "kg"); // Most recent first
        assert_eq!(items[1].from_unit, "km");
    }

    #[test]
    fn test_records_are_distinct_values() {
        let mut history = ConversionHistory::new();

        let first = history.record(QuantityKind::Length, 1.0, "km", "m", 1000.0);
        let second = history.record(QuantityKind::Length, 1.0, "km", "m", 1000.0);

        // Same conversion twice: two records, two identities
        assert_ne!(first.id, second.id);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_unbounded_growth() {
        let mut history = ConversionHistory::new();

        for i in 0..100 {
            history.record(QuantityKind::Volume, i as f64, "l", "ml", i as f64 * 1000.0);
        }

        assert_eq!(history.len(), 100);
        assert_eq!(history.list()[0].value, 99.0); // Most recent
    }

    #[test]
    fn test_clear() {
        let mut history = ConversionHistory::new();

        history.record(QuantityKind::Length, 1.0, "km", "m", 1000.0);
        history.record(QuantityKind::Length, 2.0, "km", "m", 2000.0);
        assert_eq!(history.len(), 2);

        history.clear();

        assert!(history.is_empty());
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_list_does_not_mutate() {
        let mut history = ConversionHistory::new();
        history.record(QuantityKind::Length, 1.0, "km", "m", 1000.0);

        let _ = history.list();
        let _ = history.list();

        assert_eq!(history.len(), 1);
    }
}
