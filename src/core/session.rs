//! Quiz session controller: navigation, answers, resume and finalization
//!
//! State transitions:
//! - InProgress(i) --record_answer--> InProgress(i)      (slot filled, snapshot saved)
//! - InProgress(i) --advance, i < last--> InProgress(i+1) (slot i must be answered)
//! - InProgress(last) --advance | skip--> Completed
//! - InProgress(i) --retreat, i > 0--> InProgress(i-1)
//!
//! Completed is terminal; finalize() is only available there.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::core::classifier;
use crate::core::store::{self, Storage};
use crate::types::{
    AnswerValue, Progress, ReasonCode, ResultRecord, SessionSnapshot, SessionState, Statement,
    StepOutput, STATEMENTS,
};

/// One user's pass through the statement list
#[derive(Debug)]
pub struct QuizSession<S: Storage> {
    storage: S,
    state: SessionState,
    current_index: usize,
    answers: Vec<Option<AnswerValue>>,
    /// Frozen on the first successful finalize
    result: Option<ResultRecord>,
    resumed: bool,
}

impl<S: Storage> QuizSession<S> {
    /// Start a fresh session without looking at saved progress
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::InProgress(0),
            current_index: 0,
            answers: vec![None; STATEMENTS.len()],
            result: None,
            resumed: false,
        }
    }

    /// Start a session, resuming saved progress when it is fresh at `now` and
    /// `consent` accepts it. `consent` receives the number of saved answers
    /// and is only asked when there is at least one.
    pub fn initialize(storage: S, now: DateTime<Utc>, consent: impl FnOnce(usize) -> bool) -> Self {
        let saved = store::load_snapshot(&storage, now);
        let mut session = Self::new(storage);

        let Some(snapshot) = saved else {
            return session;
        };

        let answered = snapshot.answered_count();
        if answered == 0 {
            debug!("saved session has no answers, starting fresh");
            return session;
        }
        if !consent(answered) {
            info!(answered, "resume declined, starting fresh");
            return session;
        }

        info!(answered, index = snapshot.current_index, "resuming saved session");
        session.current_index = snapshot.current_index;
        session.state = SessionState::InProgress(snapshot.current_index);
        session.answers = snapshot.answers;
        session.resumed = true;
        session
    }

    /// Write `value` into the current slot and save a snapshot
    pub fn record_answer(&mut self, value: AnswerValue) -> StepOutput {
        if self.state.is_completed() {
            return self.output(ReasonCode::Q006_SESSION_COMPLETED);
        }
        let Some(slot) = self.answers.get_mut(self.current_index) else {
            error!(index = self.current_index, "current index outside the statement list");
            return self.output(ReasonCode::Q006_SESSION_COMPLETED);
        };

        *slot = Some(value);
        debug!(index = self.current_index, value = value.value(), "answer recorded");
        self.persist();
        self.output(ReasonCode::Q001_ANSWER_RECORDED)
    }

    /// Move to the next statement, or complete the session from the last one.
    ///
    /// Refuses with `Q003_NO_ANSWER_YET` when the current statement is
    /// unanswered and not the last; nothing changes in that case.
    /// From the last statement it always completes, answered or not.
    pub fn advance(&mut self) -> Result<StepOutput, ReasonCode> {
        if self.state.is_completed() {
            return Ok(self.output(ReasonCode::Q006_SESSION_COMPLETED));
        }
        if self.current_answer().is_none() && !self.is_last() {
            return Err(ReasonCode::Q003_NO_ANSWER_YET);
        }
        Ok(self.step_forward(ReasonCode::Q002_ADVANCED))
    }

    /// Go back one statement; ignored at the first one
    pub fn retreat(&mut self) -> StepOutput {
        if self.state.is_completed() {
            return self.output(ReasonCode::Q006_SESSION_COMPLETED);
        }
        if self.current_index == 0 {
            return self.output(ReasonCode::Q004_AT_FIRST_STATEMENT);
        }
        self.current_index -= 1;
        self.state = SessionState::InProgress(self.current_index);
        self.output(ReasonCode::Q004_RETREATED)
    }

    /// Record a neutral answer and move on unconditionally
    pub fn skip(&mut self) -> StepOutput {
        if self.state.is_completed() {
            return self.output(ReasonCode::Q006_SESSION_COMPLETED);
        }
        self.record_answer(AnswerValue::Neutral);
        self.step_forward(ReasonCode::Q005_SKIPPED)
    }

    fn step_forward(&mut self, reason: ReasonCode) -> StepOutput {
        if self.is_last() {
            self.state = SessionState::Completed;
            info!(answered = self.answered_count(), "session completed");
            return self.output(ReasonCode::Q002_COMPLETED);
        }
        self.current_index += 1;
        self.state = SessionState::InProgress(self.current_index);
        self.output(reason)
    }

    /// Score the completed session and persist the result
    pub fn finalize(&mut self) -> Result<ResultRecord, ReasonCode> {
        self.finalize_at(Utc::now())
    }

    /// As [`finalize`](Self::finalize), stamping the record with `now`.
    /// The first record produced is kept; later calls return it unchanged.
    pub fn finalize_at(&mut self, now: DateTime<Utc>) -> Result<ResultRecord, ReasonCode> {
        if !self.state.is_completed() {
            return Err(ReasonCode::Q003_NOT_COMPLETED);
        }
        if let Some(record) = &self.result {
            return Ok(record.clone());
        }

        let record = classifier::evaluate(&self.answers, now);
        info!(
            total_score = record.total_score,
            answered = record.answered_count,
            position = %record.position,
            "result computed"
        );
        if let Err(e) = store::save_result(&mut self.storage, &record) {
            warn!(error = %e, "could not save result");
        }
        self.result = Some(record.clone());
        Ok(record)
    }

    /// Purge saved progress and results, then start over at the first statement
    pub fn reset(&mut self) -> StepOutput {
        if let Err(e) = store::reset(&mut self.storage) {
            warn!(error = %e, "could not purge stored quiz data");
        }
        self.state = SessionState::InProgress(0);
        self.current_index = 0;
        self.answers = vec![None; STATEMENTS.len()];
        self.result = None;
        self.resumed = false;
        info!("session reset");
        self.output(ReasonCode::Q007_SESSION_RESET)
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot(Utc::now());
        if let Err(e) = store::save_snapshot(&mut self.storage, &snapshot) {
            warn!(error = %e, "could not save session progress");
        }
    }

    fn output(&self, reason: ReasonCode) -> StepOutput {
        StepOutput::new(self.state, self.progress(), reason)
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_statement(&self) -> &'static Statement {
        &STATEMENTS[self.current_index]
    }

    pub fn current_answer(&self) -> Option<AnswerValue> {
        self.answers.get(self.current_index).copied().flatten()
    }

    pub fn answer_at(&self, index: usize) -> Option<AnswerValue> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answers(&self) -> &[Option<AnswerValue>] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        classifier::answered_count(&self.answers)
    }

    pub fn statement_count(&self) -> usize {
        self.answers.len()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.current_index, self.statement_count(), self.answered_count())
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.statement_count()
    }

    /// True when progress was restored from a saved snapshot
    pub fn was_resumed(&self) -> bool {
        self.resumed
    }

    pub fn result(&self) -> Option<&ResultRecord> {
        self.result.as_ref()
    }

    /// Snapshot of the in-progress state stamped with `saved_at`
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> SessionSnapshot {
        SessionSnapshot::new(self.current_index, self.answers.clone(), saved_at)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryStorage, KEY_PROGRESS, KEY_RESULTS};
    use crate::types::STATEMENT_COUNT;

    fn fresh() -> QuizSession<MemoryStorage> {
        QuizSession::new(MemoryStorage::new())
    }

    #[test]
    fn test_initial_state() {
        let session = fresh();
        assert_eq!(session.state(), SessionState::InProgress(0));
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.statement_count(), STATEMENT_COUNT);
        assert!(session.is_first());
    }

    #[test]
    fn test_record_then_read() {
        let mut session = fresh();
        for value in AnswerValue::ALL {
            let out = session.record_answer(value);
            assert_eq!(out.reason, ReasonCode::Q001_ANSWER_RECORDED);
            assert_eq!(session.current_answer(), Some(value));
        }
        assert_eq!(session.state(), SessionState::InProgress(0));
    }

    #[test]
    fn test_record_saves_snapshot() {
        let mut session = fresh();
        session.record_answer(AnswerValue::Agree);
        let json = session.storage().get(KEY_PROGRESS).unwrap().unwrap();
        let snap: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.answers[0], Some(AnswerValue::Agree));
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut session = fresh();
        assert_eq!(session.advance().unwrap_err(), ReasonCode::Q003_NO_ANSWER_YET);
        assert_eq!(session.current_index(), 0);

        session.record_answer(AnswerValue::Disagree);
        let out = session.advance().unwrap();
        assert_eq!(out.state, SessionState::InProgress(1));
        assert_eq!(out.reason, ReasonCode::Q002_ADVANCED);
    }

    #[test]
    fn test_retreat_ignored_at_first() {
        let mut session = fresh();
        let out = session.retreat();
        assert_eq!(out.reason, ReasonCode::Q004_AT_FIRST_STATEMENT);
        assert_eq!(session.current_index(), 0);

        session.skip();
        let out = session.retreat();
        assert_eq!(out.reason, ReasonCode::Q004_RETREATED);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_skip_writes_neutral() {
        let mut session = fresh();
        let out = session.skip();
        assert_eq!(out.reason, ReasonCode::Q005_SKIPPED);
        assert_eq!(session.answer_at(0), Some(AnswerValue::Neutral));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_finalize_requires_completion() {
        let mut session = fresh();
        assert_eq!(session.finalize().unwrap_err(), ReasonCode::Q003_NOT_COMPLETED);
        assert!(session.storage().get(KEY_RESULTS).unwrap().is_none());
    }

    #[test]
    fn test_completed_ignores_input() {
        let mut session = fresh();
        for _ in 0..STATEMENT_COUNT {
            session.skip();
        }
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.current_index(), STATEMENT_COUNT - 1);

        let out = session.record_answer(AnswerValue::StronglyAgree);
        assert_eq!(out.reason, ReasonCode::Q006_SESSION_COMPLETED);
        assert_eq!(session.answer_at(STATEMENT_COUNT - 1), Some(AnswerValue::Neutral));
        assert_eq!(session.retreat().reason, ReasonCode::Q006_SESSION_COMPLETED);
        assert_eq!(session.state(), SessionState::Completed);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = fresh();
        for _ in 0..STATEMENT_COUNT {
            session.skip();
        }
        session.finalize().unwrap();
        let out = session.reset();
        assert_eq!(out.reason, ReasonCode::Q007_SESSION_RESET);
        assert_eq!(session.state(), SessionState::InProgress(0));
        assert_eq!(session.answered_count(), 0);
        assert!(session.result().is_none());
        assert!(session.storage().is_empty());
    }
}
