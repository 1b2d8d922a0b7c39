//! Process-local memo of prefix -> completion list.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Shared, append-only memo table. Cloning shares the same storage.
///
/// Keys are raw prefixes (no trimming or case folding). Entries are never
/// evicted; only non-empty lists are stored so empty answers get retried.
#[derive(Debug, Clone, Default)]
pub struct MemoTable {
    entries: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prefix: &str) -> Option<Vec<String>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(prefix).cloned()
    }

    /// Stores `completions` for `prefix`. Empty lists are ignored; returns
    /// whether anything was stored.
    pub fn insert(&self, prefix: impl Into<String>, completions: Vec<String>) -> bool {
        if completions.is_empty() {
            return false;
        }
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(prefix.into(), completions);
        true
    }

    pub fn contains(&self, prefix: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
