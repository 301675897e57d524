//! Decoder resolution.
//!
//! A registry maps a lookup key to a registered decoder. The set of
//! components is open-ended, so an absent key is an expected outcome the
//! caller converts into fallback output; it is modeled as a
//! [`Resolution`] variant, never as an error. Registries are immutable
//! once built: the same key always resolves to the same decoder, which is
//! what makes concurrent dispatch safe without synchronization.

use crate::error::RegistryError;

/// Result of a decoder lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a, V: ?Sized> {
    /// A decoder is registered under the key.
    Resolved(&'a V),
    /// Nothing is registered under the key.
    Unknown,
}

impl<'a, V: ?Sized> Resolution<'a, V> {
    /// Returns true if a decoder was found.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// Returns the resolved decoder, if any.
    pub fn resolved(self) -> Option<&'a V> {
        match self {
            Resolution::Resolved(v) => Some(v),
            Resolution::Unknown => None,
        }
    }
}

/// A read-only mapping from lookup key to registered decoder.
///
/// This trait abstracts over registry backends (hash map, fixed table,
/// perfect hash, link-time collection) so the dispatchers do not care how
/// the decoder set was assembled.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot resolve decoders keyed by `{K}`",
    label = "missing `Registry` implementation",
    note = "Implement `Registry<{K}, V>` to make this type usable by a dispatcher."
)]
pub trait Registry<K: ?Sized, V>: Send + Sync {
    /// Look up the decoder registered under `key`.
    fn resolve(&self, key: &K) -> Resolution<'_, V>;

    /// Whether `key` has a registered decoder.
    fn contains(&self, key: &K) -> bool {
        self.resolve(key).is_resolved()
    }
}

/// Builder for registries that accept runtime registration.
pub trait RegistryBuilder<K, V>: Default + Send {
    /// The registry type this builder produces.
    type Registry: Registry<K, V>;

    /// Register `value` under `key`.
    ///
    /// Returns an error if the key is already registered.
    fn insert(&mut self, key: K, value: V) -> Result<(), RegistryError>;

    /// Build the registry, consuming the builder.
    fn build(self) -> Result<Self::Registry, RegistryError>;
}
