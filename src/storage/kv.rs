//! String-keyed document store
//!
//! A single JSON object whose top-level keys name independent entries, e.g.
//! `{"streak": {"count": 3, "last_date": "2024-03-01"}}`. Every `put` is a
//! scoped read-then-write of the whole document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use super::file_io::write_json_atomic;
use crate::error::{ExpenseError, ExpenseResult};

/// Read/write access to values keyed by string
pub trait KeyValueStore {
    /// Fetch the raw value stored under `key`
    ///
    /// Returns `PersistenceRead` when the backing document cannot be parsed.
    fn get(&self, key: &str) -> ExpenseResult<Option<Value>>;

    /// Replace the value stored under `key`
    fn put(&mut self, key: &str, value: Value) -> ExpenseResult<()>;

    /// Fetch and deserialize the value stored under `key`
    fn get_as<T>(&self, key: &str) -> ExpenseResult<Option<T>>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                ExpenseError::PersistenceRead(format!("Malformed '{}' entry: {}", key, e))
            }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`
    fn put_as<T>(&mut self, key: &str, value: &T) -> ExpenseResult<()>
    where
        Self: Sized,
        T: Serialize,
    {
        let value = serde_json::to_value(value)?;
        self.put(key, value)
    }
}

/// Key-value store backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> ExpenseResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            ExpenseError::PersistenceRead(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ExpenseError::PersistenceRead(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(ExpenseError::PersistenceRead(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<Value>> {
        Ok(self.read_document()?.remove(key))
    }

    fn put(&mut self, key: &str, value: Value) -> ExpenseResult<()> {
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(error = %e, "replacing unreadable key-value document");
                Map::new()
            }
        };
        document.insert(key.to_string(), value);
        write_json_atomic(&self.path, &document)
    }
}

/// In-process key-value store, nothing touches disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ExpenseResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> ExpenseResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
