//! Durable key/value storage for the client: the session token, the cached
//! profile and the comparison id list.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::client::error::ClientError;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "usuario";
pub const KEY_COMPARISON: &str = "comparacion";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&mut self, key: &str) -> Result<(), ClientError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        self.map.remove(key);
        Ok(())
    }
}

/// A JSON object on disk, rewritten in full on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or starts) the store at `path`. An unreadable or corrupt file
    /// is treated as empty and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(path = %path.display(), "ignoring corrupt client state: {e}");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, map }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `map` to disk; the caller adopts it only once this succeeds.
    fn write(&self, map: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string_pretty(map)
            .map_err(|e| ClientError::Storage(e.to_string()))?;

        // Write then rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut next = self.map.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        self.map = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ClientError> {
        if !self.map.contains_key(key) {
            return Ok(());
        }
        let mut next = self.map.clone();
        next.remove(key);
        self.write(&next)?;
        self.map = next;
        Ok(())
    }
}

pub fn save_json<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<(), ClientError> {
    let json = serde_json::to_string(value).map_err(|e| ClientError::Storage(e.to_string()))?;
    store.set(key, &json)
}

/// `None` when the key is missing or holds something that no longer parses.
pub fn load_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let json = store.get(key)?;
    serde_json::from_str(&json).ok()
}
