//! Durable storage of the last known game state.
//!
//! Records are JSON [`Snapshot`]s kept under a fixed key in any
//! [`KeyValueStore`]. Loading never fails: absent, unreadable or corrupt
//! records fall back to the default state.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::engine::Rules;
use crate::errors::StoreError;
use crate::game::GameState;

/// Key the game state is stored under.
pub const STATE_KEY: &str = "game";

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        // write-then-rename so a crash never leaves a half-written record
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, self.path_for(key)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Stored form of a game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// RFC3339 time of the write.
    #[serde(default)]
    pub saved_at: Option<String>,
    pub game: GameState,
}

pub fn read_snapshot<K: KeyValueStore + ?Sized>(
    store: &K,
    key: &str,
) -> Result<Option<Snapshot>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let snapshot: Snapshot = serde_json::from_str(&raw)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(Some(snapshot))
}

/// Last saved state under `key`, re-derived with `rules`, or the default
/// state when there is nothing usable.
pub fn load_state<K: KeyValueStore + ?Sized>(store: &K, key: &str, rules: &Rules) -> GameState {
    match read_snapshot(store, key) {
        Ok(Some(snapshot)) => rules.refresh(snapshot.game),
        Ok(None) => GameState::default(),
        Err(e) => {
            warn!(key, error = %e, "discarding stored game state");
            GameState::default()
        }
    }
}

pub fn save_state<K: KeyValueStore + ?Sized>(
    store: &mut K,
    key: &str,
    state: &GameState,
) -> Result<(), StoreError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        saved_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        game: state.clone(),
    };
    let json = serde_json::to_string(&snapshot)?;
    store.put(key, &json)
}
