//! File-backed key-value store for persisting small values between steps
//! (tokens, ids). One JSON file holds any number of named stores.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, StepkitError};

type StoreData = BTreeMap<String, BTreeMap<String, Value>>;

/// Handle to one named store inside the backing file. Opening a missing
/// file or store yields an empty store; writes create both.
#[derive(Debug, Clone)]
pub struct KvStore {
    path: PathBuf,
    store: String,
}

impl KvStore {
    pub fn open(path: impl Into<PathBuf>, store: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            store: store.into(),
        }
    }

    pub fn store_name(&self) -> &str {
        &self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write-through put: the value is persisted before returning.
    pub fn put(&self, key: &str, value: Value) -> Result<()> {
        let mut data = self.read_all()?;
        data.entry(self.store.clone())
            .or_default()
            .insert(key.to_string(), value);
        self.write_all(&data)
    }

    pub fn get(&self, key: &str) -> Result<Value> {
        let data = self.read_all()?;
        data.get(&self.store)
            .and_then(|s| s.get(key))
            .cloned()
            .ok_or_else(|| StepkitError::KeyNotFound {
                store: self.store.clone(),
                key: key.to_string(),
            })
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        let mut data = self.read_all()?;
        let removed = data
            .get_mut(&self.store)
            .and_then(|s| s.remove(key))
            .is_some();
        if !removed {
            return Err(StepkitError::KeyNotFound {
                store: self.store.clone(),
                key: key.to_string(),
            });
        }
        self.write_all(&data)
    }

    /// All entries of this store, in key order.
    pub fn list(&self) -> Result<BTreeMap<String, Value>> {
        let data = self.read_all()?;
        Ok(data.get(&self.store).cloned().unwrap_or_default())
    }

    fn read_all(&self) -> Result<StoreData> {
        if !self.path.exists() {
            return Ok(StoreData::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoreData::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(data)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("store.json"), name);
        (dir, store)
    }

    #[test]
    fn put_then_get_round_trips() {
        let (_dir, store) = temp_store("misc");
        store.put("accessToken", Value::from("abc123")).unwrap();
        assert_eq!(store.get("accessToken").unwrap(), Value::from("abc123"));
    }

    #[test]
    fn missing_key_is_reported_with_store_and_key() {
        let (_dir, store) = temp_store("misc");
        match store.get("nope").unwrap_err() {
            StepkitError::KeyNotFound { store, key } => {
                assert_eq!(store, "misc");
                assert_eq!(key, "nope");
            }
            other => panic!("expected KeyNotFound, got {other:?}"),
        }
    }

    #[test]
    fn stores_are_isolated_within_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let a = KvStore::open(&path, "a");
        let b = KvStore::open(&path, "b");

        a.put("k", Value::from(1)).unwrap();
        b.put("k", Value::from(2)).unwrap();

        assert_eq!(a.get("k").unwrap(), Value::from(1));
        assert_eq!(b.get("k").unwrap(), Value::from(2));
    }

    #[test]
    fn puts_persist_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        KvStore::open(&path, "misc")
            .put("token", Value::from("t"))
            .unwrap();

        let reopened = KvStore::open(&path, "misc");
        assert_eq!(reopened.get("token").unwrap(), Value::from("t"));
    }

    #[test]
    fn delete_removes_only_the_named_key() {
        let (_dir, store) = temp_store("misc");
        store.put("a", Value::from(1)).unwrap();
        store.put("b", Value::from(2)).unwrap();

        store.delete("a").unwrap();
        assert!(store.get("a").is_err());
        assert_eq!(store.get("b").unwrap(), Value::from(2));
        assert!(matches!(
            store.delete("a").unwrap_err(),
            StepkitError::KeyNotFound { .. }
        ));
    }

    #[test]
    fn list_returns_entries_in_key_order() {
        let (_dir, store) = temp_store("misc");
        store.put("z", Value::from(1)).unwrap();
        store.put("a", Value::from(2)).unwrap();

        let keys: Vec<_> = store.list().unwrap().into_keys().collect();
        assert_eq!(keys, vec!["a".to_string(), "z".to_string()]);
    }

    #[test]
    fn non_string_json_values_are_preserved() {
        let (_dir, store) = temp_store("misc");
        store
            .put("payload", serde_json::json!({"n": 1, "ok": true}))
            .unwrap();
        assert_eq!(
            store.get("payload").unwrap(),
            serde_json::json!({"n": 1, "ok": true})
        );
    }
}
