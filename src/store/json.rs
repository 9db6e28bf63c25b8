//! JSON helpers over a [`KeyValueStore`].
//!
//! Loading never fails: a missing key is `None`, a malformed value is logged
//! and also treated as `None`, so callers substitute their own defaults.

use super::kv::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Load and decode the value at `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed '{}' entry: {}", key, e);
            None
        }
    }
}

/// Load the value at `key`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> T {
    load_json(store, key).unwrap_or_default()
}

/// Encode and store a value.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, data: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.set(key, &json)
}

/// [`save_json`] for state whose persistence is best-effort: failures are
/// logged and otherwise ignored.
pub fn save_json_logged<T: Serialize>(store: &dyn KeyValueStore, key: &str, data: &T) {
    if let Err(e) = save_json(store, key, data) {
        log::warn!("Failed to save '{}': {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    #[test]
    fn test_load_missing_returns_none() {
        let store = MemoryStore::new();
        let val: Option<Vec<String>> = load_json(&store, "nothing");
        assert!(val.is_none());
    }

    #[test]
    fn test_load_malformed_returns_none() {
        let store = MemoryStore::new();
        store.set("list", "{not json").unwrap();
        let val: Option<Vec<String>> = load_json(&store, "list");
        assert!(val.is_none());

        let val: Vec<String> = load_json_or_default(&store, "list");
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&store, "list", &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&store, "list");
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_wrong_shape_is_treated_as_malformed() {
        let store = MemoryStore::new();
        store.set("list", "{\"a\":1}").unwrap();
        let val: Option<Vec<String>> = load_json(&store, "list");
        assert!(val.is_none());
    }
}
