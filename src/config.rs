// config.rs
//
// Game-state flags set by the game master. The plugin only ever reads them,
// and reads them at call time.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PluginError;

/// Read-only access to the game-state configuration.
pub trait ConfigSource {
    /// Current value for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<Value>;

    /// Whether `key` holds an active flag. Absent keys are inactive.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).as_ref().is_some_and(is_truthy)
    }
}

impl ConfigSource for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for Map<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        Map::get(self, key).cloned()
    }
}

/// A configuration store backed by a JSON object on disk.
///
/// The file is re-read on every [`ConfigStore::snapshot`], so edits made by an
/// external process show up on the next turn.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    last_good: Map<String, Value>,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_good: Map::new(),
        }
    }

    /// Re-read the file for a turn. An unreadable or half-written file is
    /// logged and the last good snapshot (empty at first) is used instead.
    pub fn refresh(&mut self) -> &Map<String, Value> {
        match self.snapshot() {
            Ok(snapshot) => self.last_good = snapshot,
            Err(e) => log::error!(
                "Failed to read game state {}, keeping last snapshot: {e}",
                self.path.display()
            ),
        }
        &self.last_good
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // A missing file is an empty configuration.
    pub fn snapshot(&self) -> Result<Map<String, Value>, PluginError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(Map::new());
        }
        let snapshot = serde_json::from_str(&data)?;
        Ok(snapshot)
    }
}

/// Truthiness of a configuration value: `null`, `false`, zero, and empty
/// strings or collections are inactive.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text used when a value is interpolated into a prompt line.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Seconds-per-character speed stored under `key`, if it is a number.
pub fn speed(config: &dyn ConfigSource, key: &str) -> Option<f64> {
    config.get(key).and_then(|value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
