//! HashMap-backed registry.
//!
//! The default backend when the decoder set is assembled at runtime.

use std::{collections::HashMap, hash::Hash};

use peldec_core::{Registry, RegistryBuilder, RegistryError, Resolution};

/// A registry backed by `HashMap`.
///
/// Works with any hashable key type; the SRC dispatcher uses it keyed by
/// [`ComponentId`](peldec_core::ComponentId) with boxed or borrowed
/// decoders as values.
pub struct MapRegistry<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> MapRegistry<K, V> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a registry from an existing map.
    pub fn from_map(map: HashMap<K, V>) -> Self {
        Self { map }
    }

    /// Get the number of registered decoders.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> Default for MapRegistry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Registry<K, V> for MapRegistry<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn resolve(&self, key: &K) -> Resolution<'_, V> {
        match self.map.get(key) {
            Some(v) => Resolution::Resolved(v),
            None => Resolution::Unknown,
        }
    }
}

/// Builder for [`MapRegistry`].
pub struct MapRegistryBuilder<K, V> {
    map: HashMap<K, V>,
    allow_duplicates: bool,
}

impl<K, V> MapRegistryBuilder<K, V> {
    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<K, V> Default for MapRegistryBuilder<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

impl<K, V> RegistryBuilder<K, V> for MapRegistryBuilder<K, V>
where
    K: Hash + Eq + Send + Sync + std::fmt::Debug,
    V: Send + Sync,
{
    type Registry = MapRegistry<K, V>;

    fn insert(&mut self, key: K, value: V) -> Result<(), RegistryError> {
        if !self.allow_duplicates && self.map.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(format!("{:?}", key)));
        }
        self.map.insert(key, value);
        Ok(())
    }

    fn build(self) -> Result<Self::Registry, RegistryError> {
        Ok(MapRegistry { map: self.map })
    }
}
