//! Log of committed transitions.
//!
//! Every `fire` that moves the machine appends one record, including
//! moves whose commands failed part way (the state change still stands).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use fauler::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "Idle".to_string(),
///     to: "Running".to_string(),
///     event: "START".to_string(),
///     command_failed: false,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "Running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state being left
    pub from: String,
    /// Name of the state entered
    pub to: String,
    /// Code of the event that was fired
    pub event: String,
    /// Whether a transition or entry command failed during this move
    pub command_failed: bool,
    /// When the move was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// History is immutable: `record` returns a new history with the entry
/// appended and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use fauler::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let step = |from: &str, to: &str| TransitionRecord {
///     from: from.to_string(),
///     to: to.to_string(),
///     event: "GO".to_string(),
///     command_failed: false,
///     timestamp: Utc::now(),
/// };
///
/// let history = StateHistory::new()
///     .record(step("Start", "Middle"))
///     .record(step("Middle", "End"));
///
/// assert_eq!(history.get_path(), vec!["Start", "Middle", "End"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<TransitionRecord>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Names of the states traversed: the first source, then the target
    /// of each record.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time between the first and last record, or `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Flag the most recent record as having had a failing command.
    pub(crate) fn mark_last_command_failed(&mut self) {
        if let Some(last) = self.transitions.last_mut() {
            last.command_failed = true;
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, timestamp: DateTime<Utc>) -> TransitionRecord {
        TransitionRecord {
            from: from.to_string(),
            to: to.to_string(),
            event: format!("{from}->{to}"),
            command_failed: false,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(record("Idle", "Running", Utc::now()));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(record("Idle", "Running", Utc::now()))
            .record(record("Running", "Done", Utc::now()));

        assert_eq!(history.get_path(), vec!["Idle", "Running", "Done"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let later = start + chrono::Duration::milliseconds(25);

        let history = StateHistory::new()
            .record(record("Idle", "Running", start))
            .record(record("Running", "Done", later));

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn mark_last_command_failed_flags_only_latest() {
        let mut history = StateHistory::new()
            .record(record("Idle", "Running", Utc::now()))
            .record(record("Running", "Done", Utc::now()));

        history.mark_last_command_failed();

        assert!(!history.transitions()[0].command_failed);
        assert!(history.transitions()[1].command_failed);
    }

    #[test]
    fn mark_last_command_failed_on_empty_is_noop() {
        let mut history = StateHistory::new();
        history.mark_last_command_failed();
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(record("Idle", "Running", Utc::now()));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.transitions(), deserialized.transitions());
    }
}
