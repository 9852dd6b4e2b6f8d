//! Persisted in-progress session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AnswerValue, STATEMENT_COUNT};
use crate::SNAPSHOT_FRESHNESS_MS;

/// In-progress session, written after every answer so the quiz can be resumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Zero-based index of the statement being shown
    pub current_index: usize,
    /// One slot per statement, `None` while unanswered
    pub answers: Vec<Option<AnswerValue>>,
    /// When this snapshot was written (Unix epoch milliseconds)
    pub saved_at: i64,
}

impl SessionSnapshot {
    pub fn new(current_index: usize, answers: Vec<Option<AnswerValue>>, saved_at: DateTime<Utc>) -> Self {
        Self {
            current_index,
            answers,
            saved_at: saved_at.timestamp_millis(),
        }
    }

    /// Milliseconds elapsed between saving and `now`, saturating at the i64 range
    pub fn age_ms(&self, now: DateTime<Utc>) -> i64 {
        now.timestamp_millis().saturating_sub(self.saved_at)
    }

    /// Younger than the freshness window (the boundary itself is stale)
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.age_ms(now) < SNAPSHOT_FRESHNESS_MS
    }

    /// Matches the compiled-in statement list and has a valid index
    pub fn is_well_formed(&self) -> bool {
        self.answers.len() == STATEMENT_COUNT && self.current_index < STATEMENT_COUNT
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn empty_answers() -> Vec<Option<AnswerValue>> {
        vec![None; STATEMENT_COUNT]
    }

    #[test]
    fn test_json_shape() {
        let mut answers = empty_answers();
        answers[0] = Some(AnswerValue::Agree);
        let snap = SessionSnapshot {
            current_index: 1,
            answers,
            saved_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["currentIndex"], 1);
        assert_eq!(json["savedAt"], 1_700_000_000_000i64);
        assert_eq!(json["answers"][0], 1);
        assert!(json["answers"][1].is_null());
    }

    #[test]
    fn test_freshness_boundary_is_exclusive() {
        let now = Utc::now();
        let at_boundary = SessionSnapshot::new(0, empty_answers(), now - Duration::milliseconds(SNAPSHOT_FRESHNESS_MS));
        let just_inside = SessionSnapshot::new(0, empty_answers(), now - Duration::milliseconds(SNAPSHOT_FRESHNESS_MS - 1));
        assert!(!at_boundary.is_fresh(now));
        assert!(just_inside.is_fresh(now));
    }

    #[test]
    fn test_extreme_saved_at_is_stale() {
        let snap = SessionSnapshot {
            current_index: 0,
            answers: empty_answers(),
            saved_at: i64::MIN,
        };
        assert_eq!(snap.age_ms(Utc::now()), i64::MAX);
        assert!(!snap.is_fresh(Utc::now()));
    }

    #[test]
    fn test_well_formed_checks_length_and_index() {
        let now = Utc::now();
        assert!(SessionSnapshot::new(29, empty_answers(), now).is_well_formed());
        assert!(!SessionSnapshot::new(30, empty_answers(), now).is_well_formed());
        assert!(!SessionSnapshot::new(0, vec![None; 5], now).is_well_formed());
    }
}
