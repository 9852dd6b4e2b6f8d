//! Quiz session state definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// The two states of a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Answering statements, positioned at the given zero-based index
    InProgress(usize),
    /// Last statement advanced past; the result can be finalized
    Completed,
}

impl SessionState {
    /// Terminal color for this state
    pub fn color(&self) -> Color {
        match self {
            SessionState::InProgress(_) => Color::Yellow,
            SessionState::Completed => Color::Green,
        }
    }

    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            SessionState::InProgress(_) => "📝",
            SessionState::Completed => "🏁",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SessionState::Completed)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::InProgress(index) => write!(f, "IN_PROGRESS({})", index),
            SessionState::Completed => write!(f, "COMPLETED"),
        }
    }
}
