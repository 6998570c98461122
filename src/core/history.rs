//! Transition history tracking.
//!
//! Every stateful object keeps an ordered record of the transitions it has
//! applied. History values are immutable: `record` returns a new history
//! with the entry appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     transition: "connect".to_string(),
///     from: "offline".to_string(),
///     to: "online".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.transition, "connect");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the transition that was applied
    pub transition: String,
    /// The state that was left
    pub from: String,
    /// The state that was entered
    pub to: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(TransitionRecord {
///     transition: "connect".to_string(),
///     from: "offline".to_string(),
///     to: "online".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.path(), vec!["offline", "online"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The most recent record, if any transition was applied.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sequence of visited states: the first record's source followed
    /// by every destination. Empty when no transition was recorded.
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
}
