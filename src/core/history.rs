//! Session history: crossings between steps over time.
//!
//! Immutable tracking in the functional style - `record` returns a new
//! history rather than mutating in place. The history is observability
//! only; nothing in the machine consults it to gate behavior, and it
//! carries no attempt counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single crossing from one step position to the next.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// The position crossed from
    pub from: usize,
    /// The position crossed to
    pub to: usize,
    /// When the crossing occurred
    pub at: DateTime<Utc>,
}

/// Ordered history of crossings within one session.
///
/// # Example
///
/// ```rust
/// use passage::core::{SessionHistory, StepRecord};
/// use chrono::Utc;
///
/// let history = SessionHistory::new();
/// let history = history.record(StepRecord { from: 0, to: 1, at: Utc::now() });
/// let history = history.record(StepRecord { from: 1, to: 2, at: Utc::now() });
///
/// assert_eq!(history.path(), vec![0, 1, 2]);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    records: Vec<StepRecord>,
}

impl SessionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a crossing, returning a new history.
    pub fn record(&self, record: StepRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of positions traversed: the starting position, then the
    /// destination of each crossing.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Total duration from the first crossing to the last.
    ///
    /// Returns `None` when nothing has been recorded yet.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.at.signed_duration_since(first.at);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded crossings in order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = SessionHistory::new();
        assert_eq!(history.records().len(), 0);
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = SessionHistory::new();
        let record = StepRecord {
            from: 0,
            to: 1,
            at: Utc::now(),
        };

        let new_history = history.record(record);

        assert_eq!(history.records().len(), 0);
        assert_eq!(new_history.records().len(), 1);
    }

    #[test]
    fn path_chains_crossings_in_order() {
        let mut history = SessionHistory::new();
        for (from, to) in [(0, 1), (1, 2), (2, 3)] {
            history = history.record(StepRecord {
                from,
                to,
                at: Utc::now(),
            });
        }

        assert_eq!(history.path(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn single_crossing_has_duration_zero() {
        let at = Utc::now();
        let history = SessionHistory::new().record(StepRecord { from: 0, to: 1, at });

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = SessionHistory::new().record(StepRecord {
            from: 0,
            to: 1,
            at: Utc::now(),
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: SessionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
