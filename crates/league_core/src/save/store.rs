//! Key-value backends for the two league documents.

use std::collections::HashMap;
use std::fs::{self, rename, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::error::SaveError;

/// Durable string storage addressed by a fixed logical key.
pub trait KeyValueStore {
    /// `Ok(None)` when nothing has been written under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, SaveError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), SaveError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `./saves` under the current directory.
    pub fn in_current_dir() -> Self {
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("saves");
        Self::new(dir)
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SaveError::Io(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.flush()?;
            file.sync_all()?;
        }

        rename(&temp_path, &path)?;

        log::debug!("Saved {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

/// In-process store. Clones share the same map, so a test can keep a handle
/// and inspect what the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|entries| entries.get(key).cloned())
    }

    pub fn insert(&self, key: &str, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.into());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SaveError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| SaveError::StoreUnavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SaveError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| SaveError::StoreUnavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
