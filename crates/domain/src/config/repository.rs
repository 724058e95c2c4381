use std::{
    fs,
    path::Path,
    sync::{PoisonError, RwLock},
};

use serde_json::{Map, Value};

use super::{ConfigSource, ConfigValue, ConfigurationError};

/// In-memory configuration tree shared by the host application.
///
/// Lookups walk nested objects one dotted segment at a time. Writes go through
/// interior mutability so the repository can be shared behind an `Arc` while
/// providers still merge their defaults into it.
#[derive(Debug, Default)]
pub struct ConfigRepository {
    root: RwLock<Map<String, Value>>,
}

impl ConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already parsed tree. Non-object roots yield an empty repository.
    pub fn from_value(value: ConfigValue) -> Self {
        let root = match value {
            Value::Object(entries) => entries,
            _ => Map::new(),
        };
        Self {
            root: RwLock::new(root),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(value))
    }

    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Stores `value` at `path`, creating (or replacing non-object) parents.
    pub fn set(&self, path: &str, value: ConfigValue) {
        let mut root = self.root.write().unwrap_or_else(PoisonError::into_inner);
        let mut segments = path.split('.').peekable();
        let mut current = &mut *root;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), value);
                return;
            }
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(entries) = slot else {
                return;
            };
            current = entries;
        }
    }

    /// Merges packaged `defaults` under `key`. Entries already configured by
    /// the application win; a non-object value at `key` is discarded.
    pub fn merge_from(&self, key: &str, defaults: ConfigValue) {
        let merged = match (defaults, self.get(key)) {
            (Value::Object(mut base), Some(Value::Object(existing))) => {
                base.extend(existing);
                Value::Object(base)
            }
            (defaults, _) => defaults,
        };
        self.set(key, merged);
    }

    fn lookup<T>(&self, path: &str, f: impl FnOnce(&Value) -> T) -> Option<T> {
        let root = self.root.read().unwrap_or_else(PoisonError::into_inner);
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(f(current))
    }
}

impl ConfigSource for ConfigRepository {
    fn has(&self, path: &str) -> bool {
        self.lookup(path, |_| ()).is_some()
    }

    fn get(&self, path: &str) -> Option<ConfigValue> {
        self.lookup(path, Value::clone)
    }
}
