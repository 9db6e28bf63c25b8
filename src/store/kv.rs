//! Key-value stores backing every persisted blob.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String-valued key-value persistence, shaped like browser local storage.
///
/// Simulators hold an `Arc<dyn KeyValueStore>`; the terminal shell hands them a
/// [`FileStore`], tests a [`MemoryStore`].
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Missing keys and unreadable entries both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    fn remove(&self, key: &str) -> io::Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written String behind.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory (`~/.garden/` by default).
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
pub(crate) fn temp_store_dir() -> PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "garden-test-{}-{}",
        std::process::id(),
        test_id
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("value"));
        assert_eq!(store.len(), 1);

        store.remove("key").unwrap();
        assert!(store.get("key").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = temp_store_dir();
        let store = FileStore::open(&dir).expect("open should succeed");

        assert!(store.get("heartGameStats").is_none());
        store.set("heartGameStats", "{\"score\":1}").unwrap();
        assert_eq!(
            store.get("heartGameStats").as_deref(),
            Some("{\"score\":1}")
        );
        assert!(store.path_for("heartGameStats").exists());

        store.remove("heartGameStats").unwrap();
        assert!(store.get("heartGameStats").is_none());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_file_store_remove_missing_is_ok() {
        let dir = temp_store_dir();
        let store = FileStore::open(&dir).unwrap();
        assert!(store.remove("never_written").is_ok());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_path_for_uses_json_extension() {
        let dir = temp_store_dir();
        let store = FileStore::open(&dir).unwrap();
        assert!(store
            .path_for("user_Keychain")
            .to_string_lossy()
            .ends_with("user_Keychain.json"));
        fs::remove_dir_all(dir).ok();
    }
}
