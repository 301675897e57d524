//! PHF-based registry.
//!
//! Wraps a static perfect-hash map keyed by the two-character component
//! id string. The map is built at compile time and the registry is a
//! thin, immutable view over it.

use peldec_core::{ComponentId, Registry, Resolution};

/// A registry based on `phf::Map`.
///
/// Keys are lowercase component id strings; [`ComponentId`] lowercases on
/// construction, so lookups line up without further folding.
pub struct PhfRegistry<V: 'static> {
    map: &'static phf::Map<&'static str, V>,
}

impl<V: Send + Sync + 'static> PhfRegistry<V> {
    /// Create a new registry from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, V>) -> Self {
        Self { map }
    }
}

impl<V: Send + Sync + 'static> Registry<ComponentId, V> for PhfRegistry<V> {
    fn resolve(&self, key: &ComponentId) -> Resolution<'_, V> {
        match self.map.get(key.as_str()) {
            Some(v) => Resolution::Resolved(v),
            None => Resolution::Unknown,
        }
    }
}

// Note: there is no builder for PhfRegistry because PHF maps are
// constructed at compile time, not runtime.
