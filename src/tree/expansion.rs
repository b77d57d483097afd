use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier -> expanded flag, kept for the whole session and persisted with
/// the settings. Independent of any particular tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionStore {
    entries: BTreeMap<String, bool>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Saved flag for a node. A hit on the legacy key is moved under `key`.
    pub fn lookup(&mut self, key: &str, legacy_key: &str) -> Option<bool> {
        if let Some(v) = self.get(key) {
            return Some(v);
        }
        if legacy_key == key {
            return None;
        }
        let v = self.entries.remove(legacy_key)?;
        self.entries.insert(key.to_string(), v);
        Some(v)
    }

    /// Records a flag under `key` and drops any legacy entry for the same node.
    pub fn record(&mut self, key: &str, legacy_key: &str, expanded: bool) {
        self.entries.insert(key.to_string(), expanded);
        if legacy_key != key {
            self.entries.remove(legacy_key);
        }
    }
}
