//! Persisted best scores for the timed games.
//!
//! Scores are stored as ASCII decimal strings in a device-local key/value
//! store. The [`HighScoreStore`] wrapper never fails: a missing, unreadable
//! or unparsable entry reads as `0`, and a failed write is logged and
//! dropped so a broken disk can never end a game session.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::training_engine::error::DrillResult;

/// Storage key for the time challenge best score.
pub const TIME_CHALLENGE_HIGHSCORE_KEY: &str = "hijri-timechallenge-highscore";

/// Storage key for the quick sort best score.
pub const QUICK_SORT_HIGHSCORE_KEY: &str = "hijri-quicksort-highscore";

/// A string key/value capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> DrillResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> DrillResult<()>;
}

/// In-memory store. Clones share the same entries, so a test can keep a
/// handle while a session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored string, bypassing score parsing.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DrillResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> DrillResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file (`{"key": "value", ...}`).
///
/// The file is read on every access; a missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> DrillResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DrillResult<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DrillResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Best-score bookkeeping on top of any [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct HighScoreStore<S> {
    backend: S,
}

impl<S: KeyValueStore> HighScoreStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Stored best score, `0` when absent or unreadable.
    pub fn read(&self, key: &str) -> u32 {
        match self.backend.get(key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring unparsable high score {raw:?} under {key}");
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                log::warn!("high score storage unavailable for {key}: {e}");
                0
            }
        }
    }

    /// Store `score` if it beats the stored value. Returns whether it wrote.
    pub fn record(&mut self, key: &str, score: u32) -> bool {
        let best = self.read(key);
        if score <= best {
            return false;
        }
        match self.backend.set(key, &score.to_string()) {
            Ok(()) => {
                log::info!("new high score {score} for {key} (was {best})");
                true
            }
            Err(e) => {
                log::warn!("could not persist high score for {key}: {e}");
                false
            }
        }
    }
}
