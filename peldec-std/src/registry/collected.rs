//! Link-time decoder collection.
//!
//! Components submit their SRC decoders with `inventory::submit!` from
//! anywhere in the linked program; [`collected_src_registry`] gathers the
//! submissions into a registry once at startup. This is the discovery
//! convention standing in for a directory of per-component modules: the
//! id a decoder is submitted under is the same key the dispatcher
//! derives from the reference code.

use std::collections::HashMap;

use peldec_core::{ComponentId, SrcDecoder};

use crate::registry::MapRegistry;

/// A submitted SRC decoder entry.
///
/// ```rust,ignore
/// inventory::submit! {
///     RegisteredSrcDecoder { id: "e5", decoder: &E500SrcDecoder }
/// }
/// ```
pub struct RegisteredSrcDecoder {
    /// Two-character component id, case-insensitive.
    pub id: &'static str,
    /// The decoder instance.
    pub decoder: &'static dyn SrcDecoder,
}

inventory::collect!(RegisteredSrcDecoder);

/// Gather all submitted SRC decoders into a registry.
///
/// Submissions with an invalid id are dropped and duplicate ids keep the
/// first submission; both are logged rather than treated as fatal, since
/// a bad registration should not take down the viewer.
pub fn collected_src_registry() -> MapRegistry<ComponentId, &'static dyn SrcDecoder> {
    let mut map: HashMap<ComponentId, &'static dyn SrcDecoder> = HashMap::new();

    for entry in inventory::iter::<RegisteredSrcDecoder> {
        let id = match entry.id.parse::<ComponentId>() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(id = entry.id, %err, "ignoring SRC decoder with invalid component id");
                continue;
            }
        };

        if map.contains_key(&id) {
            tracing::warn!(component = %id, "duplicate SRC decoder submission, keeping the first");
            continue;
        }
        map.insert(id, entry.decoder);
    }

    MapRegistry::from_map(map)
}
