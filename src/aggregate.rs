//! Accumulation of extracted keys across files.

use std::collections::BTreeMap;

/// Mapping from key to every location that produced it, accumulated over the
/// whole scan. Ordered by key so downstream output is deterministic; the
/// location list keeps discovery order (file order, then strategy order
/// within a file) and is never deduplicated.
#[derive(Debug, Default)]
pub struct KeyIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one discovery of `key` at `location`.
    pub fn record(&mut self, key: String, location: &str) {
        self.entries
            .entry(key)
            .or_default()
            .push(location.to_string());
    }

    /// Fold one file's discoveries in, in extraction order.
    pub fn merge_file(&mut self, location: &str, keys: Vec<String>) {
        for key in keys {
            self.record(key, location);
        }
    }

    /// Number of unique keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Unique keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Locations recorded for `key`, in discovery order.
    pub fn locations(&self, key: &str) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }
}
