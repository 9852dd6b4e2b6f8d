//! Local key/value storage for sessions and results
//!
//! Four keys, all string-valued:
//! - `quizProgress`: session snapshot (JSON), written on every answer
//! - `quizResults`: result record (JSON), written by finalize
//! - `quizScore`: raw score, stringified integer
//! - `quizPosition`: raw position label
//!
//! Readers never fail hard: unreadable or malformed entries are logged and
//! treated as absent.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::classifier;
use crate::types::{PositionLabel, ResultLookup, ResultRecord, SessionSnapshot};

pub const KEY_PROGRESS: &str = "quizProgress";
pub const KEY_RESULTS: &str = "quizResults";
pub const KEY_SCORE: &str = "quizScore";
pub const KEY_POSITION: &str = "quizPosition";

/// Every key a reset must purge
pub const ALL_KEYS: [&str; 4] = [KEY_PROGRESS, KEY_RESULTS, KEY_SCORE, KEY_POSITION];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write store {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("store {path} is not a valid key/value file: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key/value storage with the semantics of browser local storage
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every listed key in one step: either all are gone or none are
    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError>;

    /// Set several keys in one step
    fn set_all(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-memory storage, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }
}

/// Storage backed by a single JSON object file.
///
/// Every write replaces the whole file through a temp file + rename, so a
/// reader sees either the old or the new contents. Reads of a file that is
/// not a JSON object fail with [`StoreError::Corrupt`]; the next write
/// replaces it.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Entries to build the next write on. A corrupt file is logged and
    /// replaced, so the store can always be reset or written again.
    fn entries_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StoreError> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!(error = %e, "replacing corrupt store file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove_all(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        let (mut entries, corrupt) = self.entries_for_write()?;
        let before = entries.len();
        for key in keys {
            entries.remove(*key);
        }
        if entries.len() == before && !corrupt {
            return Ok(());
        }
        self.write_entries(&entries)
    }

    fn set_all(&mut self, new_entries: &[(&str, String)]) -> Result<(), StoreError> {
        let (mut entries, _) = self.entries_for_write()?;
        for (key, value) in new_entries {
            entries.insert(key.to_string(), value.clone());
        }
        self.write_entries(&entries)
    }
}

// =============================================================================
// SESSION SNAPSHOT
// =============================================================================

pub fn save_snapshot<S: Storage + ?Sized>(storage: &mut S, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
    let json = serde_json::to_string(snapshot)?;
    storage.set(KEY_PROGRESS, &json)
}

/// Load a resumable snapshot: present, parseable, well formed and fresh at `now`
pub fn load_snapshot<S: Storage + ?Sized>(storage: &S, now: DateTime<Utc>) -> Option<SessionSnapshot> {
    let json = match storage.get(KEY_PROGRESS) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "could not read saved session");
            return None;
        }
    };

    let snapshot: SessionSnapshot = match serde_json::from_str(&json) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %e, "discarding unparsable saved session");
            return None;
        }
    };

    if !snapshot.is_well_formed() {
        warn!(
            current_index = snapshot.current_index,
            slots = snapshot.answers.len(),
            "discarding malformed saved session"
        );
        return None;
    }

    if !snapshot.is_fresh(now) {
        debug!(age_ms = snapshot.age_ms(now), "saved session is stale");
        return None;
    }

    Some(snapshot)
}

// =============================================================================
// RESULT RECORD
// =============================================================================

/// Write the record plus the raw score/position keys read by legacy consumers
pub fn save_result<S: Storage + ?Sized>(storage: &mut S, record: &ResultRecord) -> Result<(), StoreError> {
    let json = serde_json::to_string(record)?;
    storage.set_all(&[
        (KEY_RESULTS, json),
        (KEY_SCORE, record.total_score.to_string()),
        (KEY_POSITION, record.position.label().to_string()),
    ])
}

/// Find the stored result, falling back to the raw keys when the record is
/// missing or unparsable. Either raw key alone is enough for a fallback.
pub fn load_result<S: Storage + ?Sized>(storage: &S) -> ResultLookup {
    let read = |key: &str| match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "could not read stored result");
            None
        }
    };

    if let Some(json) = read(KEY_RESULTS) {
        match serde_json::from_str::<ResultRecord>(&json) {
            Ok(record) => return ResultLookup::Full(record),
            Err(e) => warn!(error = %e, "stored result record is unparsable, using raw score"),
        }
    }

    let raw_score = read(KEY_SCORE);
    let stored_position = read(KEY_POSITION).and_then(|label| PositionLabel::from_label(label.trim()));
    if raw_score.is_none() && stored_position.is_none() {
        return ResultLookup::NotFound;
    }

    let total_score = raw_score
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .unwrap_or(0);
    let position = stored_position.unwrap_or_else(|| classifier::classify(total_score));

    ResultLookup::Fallback { total_score, position }
}

/// Purge the session snapshot and every result key
pub fn reset<S: Storage + ?Sized>(storage: &mut S) -> Result<(), StoreError> {
    storage.remove_all(&ALL_KEYS)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerValue, STATEMENT_COUNT};
    use chrono::Duration;

    fn snapshot_at(saved_at: DateTime<Utc>) -> SessionSnapshot {
        let mut answers = vec![None; STATEMENT_COUNT];
        answers[0] = Some(AnswerValue::Agree);
        SessionSnapshot::new(1, answers, saved_at)
    }

    #[test]
    fn test_memory_storage_basics() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("a").unwrap(), None);
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        storage.remove_all(&["a", "b", "missing"]).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut storage = MemoryStorage::new();
        let now = Utc::now();
        let snap = snapshot_at(now);
        save_snapshot(&mut storage, &snap).unwrap();
        assert_eq!(load_snapshot(&storage, now), Some(snap));
    }

    #[test]
    fn test_stale_snapshot_ignored() {
        let mut storage = MemoryStorage::new();
        let now = Utc::now();
        save_snapshot(&mut storage, &snapshot_at(now - Duration::hours(2))).unwrap();
        assert_eq!(load_snapshot(&storage, now), None);
    }

    #[test]
    fn test_garbage_snapshot_ignored() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_PROGRESS, "{not json").unwrap();
        assert_eq!(load_snapshot(&storage, Utc::now()), None);

        storage
            .set(KEY_PROGRESS, r#"{"currentIndex":0,"answers":[5],"savedAt":0}"#)
            .unwrap();
        assert_eq!(load_snapshot(&storage, Utc::now()), None);
    }

    #[test]
    fn test_min_saved_at_snapshot_ignored() {
        let mut storage = MemoryStorage::new();
        let mut answers = vec![None; STATEMENT_COUNT];
        answers[0] = Some(AnswerValue::Agree);
        let json = serde_json::json!({
            "currentIndex": 1,
            "answers": answers,
            "savedAt": i64::MIN,
        });
        storage.set(KEY_PROGRESS, &json.to_string()).unwrap();
        assert_eq!(load_snapshot(&storage, Utc::now()), None);
    }

    #[test]
    fn test_result_fallback_uses_classify_for_unknown_position() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_SCORE, "-50").unwrap();
        storage.set(KEY_POSITION, "???").unwrap();
        assert_eq!(
            load_result(&storage),
            ResultLookup::Fallback {
                total_score: -50,
                position: PositionLabel::RadicalLeft
            }
        );
    }

    #[test]
    fn test_result_fallback_unparsable_score_is_zero() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_SCORE, "abc").unwrap();
        assert_eq!(
            load_result(&storage),
            ResultLookup::Fallback {
                total_score: 0,
                position: PositionLabel::Center
            }
        );
    }

    #[test]
    fn test_result_fallback_position_without_score() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_POSITION, "Centro-Direita").unwrap();
        assert_eq!(
            load_result(&storage),
            ResultLookup::Fallback {
                total_score: 0,
                position: PositionLabel::CenterRight
            }
        );

        storage.set(KEY_POSITION, "???").unwrap();
        assert_eq!(load_result(&storage), ResultLookup::NotFound);
    }

    #[test]
    fn test_nothing_stored_is_not_found() {
        let storage = MemoryStorage::new();
        assert_eq!(load_result(&storage), ResultLookup::NotFound);
    }
}
