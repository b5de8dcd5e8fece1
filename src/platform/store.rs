//! Durable key-value storage for score lists
//!
//! Two backends: an in-memory map for tests and a per-user JSON file store.
//! Reads are fail-soft; a missing or unreadable key is simply absent.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Durable key-value store holding lists of round scores
pub trait ScoreStore {
    /// Read a stored list; `None` when missing or unreadable
    fn get(&self, key: &str) -> Option<Vec<i64>>;
    /// Replace a stored list
    fn set(&mut self, key: &str, values: &[i64]);
}

/// Volatile store for tests and as a fallback
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, Vec<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<i64>> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, values: &[i64]) {
        self.map.insert(key.to_string(), values.to_vec());
    }
}

/// One JSON file per key under a data directory
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at the per-user data directory
    pub fn open_default() -> Result<Self> {
        let proj = ProjectDirs::from("com", "frog-snap", "FrogSnap")
            .context("could not resolve project directories")?;
        Ok(Self::open(proj.data_local_dir()))
    }

    /// Store rooted at an explicit directory
    pub fn open(dir: &Path) -> Self {
        fs::create_dir_all(dir).ok();
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<i64>> {
        let text = fs::read_to_string(self.path_for(key)).ok()?;
        serde_json::from_str(&text).ok()
    }

    fn set(&mut self, key: &str, values: &[i64]) {
        let path = self.path_for(key);
        let write = || -> Result<()> {
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
            atomic_rename(&tmp, &path)
        };
        if let Err(err) = write() {
            log::warn!("Failed to store {key}: {err}");
        }
    }
}

/// Best-effort atomic replace on the same filesystem
pub(crate) fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> (FileStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("frog-snap-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        (FileStore::open(&dir), dir)
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("scores"), None);
        store.set("scores", &[1, -2, 3]);
        assert_eq!(store.get("scores"), Some(vec![1, -2, 3]));
        store.set("scores", &[9]);
        assert_eq!(store.get("scores"), Some(vec![9]));
    }

    #[test]
    fn test_file_store_round_trip() {
        let (mut store, dir) = temp_store("round-trip");
        assert_eq!(store.get("scores"), None);
        store.set("scores", &[5, 0, -7]);
        assert_eq!(store.get("scores"), Some(vec![5, 0, -7]));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_file_store_corrupt_reads_as_missing() {
        let (store, dir) = temp_store("corrupt");
        fs::write(dir.join("scores.json"), b"not json at all").unwrap();
        assert_eq!(store.get("scores"), None);
        let _ = fs::remove_dir_all(dir);
    }
}
