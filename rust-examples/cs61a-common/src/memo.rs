//! # Write-once Memo Tables
//!
//! A memoization table backed by `im::OrdMap`. Entries are write-once: after
//! a key has a value, later writes for that key are ignored and the stored
//! value is returned. The table only grows until [`MemoTable::clear`].
//!
//! ## Why a persistent map
//!
//! - [`MemoTable::snapshot`] is O(1) thanks to structural sharing, so callers
//!   can compare the table before and after a query without copying it
//! - Keys are ordered, so the largest memoized key is available directly
//!
//! ## Example
//!
//! ```
//! use cs61a_common::memo::MemoTable;
//!
//! let mut table: MemoTable<u64, bool> = MemoTable::new();
//! assert_eq!(table.record(1, true), true);
//!
//! // A second write for the same key keeps the first value
//! assert_eq!(table.record(1, false), true);
//! assert_eq!(table.get(&1), Some(true));
//! assert_eq!(table.len(), 1);
//! ```

use im::OrdMap;
use std::fmt;

/// A write-once memoization table.
#[derive(Clone)]
pub struct MemoTable<K, V> {
    entries: OrdMap<K, V>,
}

// `OrdMap`'s Debug needs `K: Ord`, which a derive would not ask for.
impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for MemoTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl<K: Ord + Clone, V: Clone> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> MemoTable<K, V> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: OrdMap::new(),
        }
    }

    /// Returns the memoized value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    /// Returns true if `key` has been memoized.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Memoizes `value` under `key` unless the key is already present.
    ///
    /// Returns the value that is stored after the call.
    pub fn record(&mut self, key: K, value: V) -> V {
        if let Some(existing) = self.entries.get(&key) {
            return existing.clone();
        }
        self.entries.insert(key, value.clone());
        value
    }

    /// Returns the memoized value for `key`, computing and storing it first
    /// if necessary.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        match self.entries.get(&key) {
            Some(value) => value.clone(),
            None => {
                let value = compute();
                self.entries.insert(key, value.clone());
                value
            }
        }
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last(&self) -> Option<(K, V)> {
        self.entries
            .get_max()
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    /// Number of memoized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A cheap, immutable copy of the current entries.
    #[must_use]
    pub fn snapshot(&self) -> OrdMap<K, V> {
        self.entries.clone()
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries = OrdMap::new();
    }
}
