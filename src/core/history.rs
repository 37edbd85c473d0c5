//! Transition logging.
//!
//! Every actual state change a machine performs is recorded, giving hosts
//! an inspectable trail of which signal moved the machine where, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left.
    pub from: String,
    /// The state being entered.
    pub to: String,
    /// Name of the signal that drove the change.
    pub signal: String,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of the state changes a machine has performed.
///
/// The log lives in memory for the machine's lifetime; it is not a
/// persistence mechanism.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use ministate::{TransitionLog, TransitionRecord};
///
/// let mut log = TransitionLog::new();
/// log.push(TransitionRecord {
///     from: "Idle".into(),
///     to: "Running".into(),
///     signal: "start".into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec!["Idle", "Running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All records, in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The path of states traversed: the first record's origin followed by
    /// each record's destination.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last record, if any.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, signal: &str) -> TransitionRecord {
        TransitionRecord {
            from: from.to_string(),
            to: to.to_string(),
            signal: signal.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn path_follows_record_order() {
        let mut log = TransitionLog::new();
        log.push(record("Idle", "Running", "start"));
        log.push(record("Running", "Running", "start"));
        log.push(record("Running", "Idle", "relax"));

        assert_eq!(log.path(), vec!["Idle", "Running", "Running", "Idle"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn single_record_has_zero_duration() {
        let mut log = TransitionLog::new();
        log.push(record("Idle", "Running", "start"));

        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut log = TransitionLog::new();
        let start = Utc::now();
        log.push(TransitionRecord {
            from: "Idle".into(),
            to: "Running".into(),
            signal: "start".into(),
            timestamp: start,
        });
        log.push(TransitionRecord {
            from: "Running".into(),
            to: "Idle".into(),
            signal: "relax".into(),
            timestamp: start + chrono::Duration::milliseconds(25),
        });

        assert_eq!(log.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn log_roundtrips_through_serde() {
        let mut log = TransitionLog::new();
        log.push(record("Idle", "Running", "start"));

        let json = serde_json::to_string(&log).unwrap();
        let back: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
    }
}
