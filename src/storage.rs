// SPDX-License-Identifier: MPL-2.0
//! Durable key-value store for state that survives restarts.
//!
//! Each key maps to one JSON file under the application data directory.
//! The contract is deliberately forgiving: `read` returns the
//! caller-supplied default on a missing file, an I/O failure, or a
//! parse failure, and `write` logs and no-ops when the store is
//! unavailable, leaving in-memory state as the only record for the
//! session. There is no transaction across keys; each key is written
//! independently and callers must tolerate one key lagging another
//! after a crash.

use crate::app::paths;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Well-known store keys.
pub mod keys {
    /// Dark-mode flag (bool).
    pub const THEME: &str = "theme";
    /// Ordered playlist items.
    pub const PLAYLIST: &str = "playlist";
    /// Recency-ordered watch history, capped.
    pub const HISTORY: &str = "history";
}

/// Handle to the on-disk store.
///
/// `dir` is `None` when no data directory could be resolved; reads then
/// return defaults and writes are dropped, so the application still
/// runs, just without persistence.
#[derive(Debug, Clone)]
pub struct Store {
    dir: Option<PathBuf>,
}

impl Store {
    /// Opens the store at the default data directory.
    #[must_use]
    pub fn open() -> Self {
        let dir = paths::get_data_dir();
        if dir.is_none() {
            tracing::warn!("no data directory available; state will not persist");
        }
        Self { dir }
    }

    /// Opens the store rooted at an explicit directory (tests, portable
    /// deployments).
    #[must_use]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    /// Reads and deserializes the value stored under `key`, falling back
    /// to `default` on absence or any failure. Never raises.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(path) = self.file_path(key) else {
            return default;
        };
        if !path.exists() {
            return default;
        }
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read store file; using default");
                return default;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "failed to parse store file; using default");
                default
            }
        }
    }

    /// Serializes and persists `value` under `key`. On failure the error
    /// is logged and the write is dropped.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let Some(path) = self.file_path(key) else {
            return;
        };
        let contents = match serde_json::to_string(value) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(key, %err, "failed to serialize value for store");
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(key, %err, "failed to create store directory");
                return;
            }
        }
        if let Err(err) = fs::write(&path, contents) {
            tracing::warn!(key, %err, "failed to write store file");
        }
    }

    fn file_path(&self, key: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{key}.json")))
    }
}
