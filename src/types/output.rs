//! Output structures for terminal display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{ReasonCode, SessionState};

/// Progress through the statement list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the statement being shown
    pub statement_number: usize,
    pub total: usize,
    /// Share of the list reached, 0-100
    pub percent: f64,
    pub answered_count: usize,
}

impl Progress {
    pub fn new(index: usize, total: usize, answered_count: usize) -> Self {
        let statement_number = index + 1;
        let percent = if total == 0 {
            0.0
        } else {
            statement_number as f64 / total as f64 * 100.0
        };
        Self {
            statement_number,
            total,
            percent,
            answered_count,
        }
    }

    /// Text progress bar of the given width
    pub fn bar(&self, width: usize) -> String {
        let filled = ((self.percent / 100.0) * width as f64).round() as usize;
        let filled = filled.min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

/// Output structure for each session operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutput {
    pub timestamp: DateTime<Utc>,
    pub state: SessionState,
    pub progress: Progress,
    /// Why the session is in this state
    pub reason: ReasonCode,
}

impl StepOutput {
    pub fn new(state: SessionState, progress: Progress, reason: ReasonCode) -> Self {
        Self {
            timestamp: Utc::now(),
            state,
            progress,
            reason,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} Pergunta {} de {} | respondidas={} | {}",
            self.state.emoji(),
            self.progress.statement_number,
            self.progress.total,
            self.progress.answered_count,
            self.reason.description(),
        );
        if self.reason.is_refusal() {
            line.red().to_string()
        } else {
            line.color(self.state.color()).to_string()
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "state={} | question={}/{} | answered={} | reason={}",
            self.state,
            self.progress.statement_number,
            self.progress.total,
            self.progress.answered_count,
            self.reason.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        let progress = Progress::new(14, 30, 10);
        assert_eq!(progress.statement_number, 15);
        assert!((progress.percent - 50.0).abs() < 1e-9);
        assert_eq!(progress.bar(10), "[#####-----]");
    }

    #[test]
    fn test_parseable_format() {
        let out = StepOutput::new(
            SessionState::InProgress(2),
            Progress::new(2, 30, 2),
            ReasonCode::Q002_ADVANCED,
        );
        assert_eq!(
            out.to_parseable_string(),
            "state=IN_PROGRESS(2) | question=3/30 | answered=2 | reason=Q002_ADVANCED"
        );
    }
}
