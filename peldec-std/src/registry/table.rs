//! Fixed-table registry.
//!
//! A const-constructible registry for decoder sets known at compile
//! time. The table is embedded directly in the binary; no allocation,
//! no startup cost.

use peldec_core::{Registry, Resolution};

/// A registry with a fixed-size table known at compile time.
///
/// # Type Parameters
///
/// - `K`: The key type (must be `Ord` for binary search)
/// - `V`: The registered decoder type
/// - `N`: The number of entries (const generic)
///
/// For small `N` (<= 4), lookup is a linear scan; larger tables use
/// binary search, which requires the entries to be sorted by key.
pub struct TableRegistry<K, V, const N: usize> {
    /// Sorted array of (key, decoder) pairs.
    entries: [(K, V); N],
}

impl<K, V, const N: usize> TableRegistry<K, V, N>
where
    K: Ord,
{
    /// Create a registry from a sorted array of entries.
    ///
    /// Sorting cannot be verified in a const context; callers must keep
    /// the entries ordered by key or lookups beyond the linear-scan size
    /// will miss.
    pub const fn new(entries: [(K, V); N]) -> Self {
        Self { entries }
    }

    /// Create a registry and sort the entries at runtime.
    pub fn new_sorted(mut entries: [(K, V); N]) -> Self {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// Look up an entry by key.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<&V> {
        if N <= 4 {
            for (k, v) in &self.entries {
                if k == key {
                    return Some(v);
                }
            }
            None
        } else {
            self.entries
                .binary_search_by(|(k, _)| k.cmp(key))
                .ok()
                .map(|idx| &self.entries[idx].1)
        }
    }

    /// Get the number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the registry is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<K, V, const N: usize> Registry<K, V> for TableRegistry<K, V, N>
where
    K: Ord + Send + Sync,
    V: Send + Sync,
{
    fn resolve(&self, key: &K) -> Resolution<'_, V> {
        match self.lookup(key) {
            Some(v) => Resolution::Resolved(v),
            None => Resolution::Unknown,
        }
    }
}
