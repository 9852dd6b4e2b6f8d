//! Finalized quiz outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AnswerValue, PositionLabel};

/// Outcome of a completed session, recomputable from `answers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Sum of all answered slots
    pub total_score: i32,
    pub answered_count: usize,
    pub answers: Vec<Option<AnswerValue>>,
    /// Serialized as an ISO 8601 string
    pub computed_at: DateTime<Utc>,
    pub position: PositionLabel,
}

/// What the result view found in storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLookup {
    /// Complete record
    Full(ResultRecord),
    /// Only the raw score/position keys were usable
    Fallback {
        total_score: i32,
        position: PositionLabel,
    },
    /// Nothing stored; the user has to take the quiz
    NotFound,
}

impl ResultLookup {
    pub fn total_score(&self) -> Option<i32> {
        match self {
            Self::Full(record) => Some(record.total_score),
            Self::Fallback { total_score, .. } => Some(*total_score),
            Self::NotFound => None,
        }
    }

    pub fn position(&self) -> Option<PositionLabel> {
        match self {
            Self::Full(record) => Some(record.position),
            Self::Fallback { position, .. } => Some(*position),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}
