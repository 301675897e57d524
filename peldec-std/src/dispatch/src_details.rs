//! Primary-SRC details dispatch.
//!
//! Resolves the component id embedded in a reference code to a
//! registered [`SrcDecoder`] and returns its output verbatim. Every path
//! that cannot produce decoder output returns
//! [`EMPTY_SRC_DETAILS`] instead: the surrounding renderer treats an
//! absent or malformed payload as a hard error for the whole record, so
//! this boundary always yields valid JSON text.

use peldec_core::{ComponentId, EMPTY_SRC_DETAILS, Registry, Resolution, SrcData, SrcDecoder};

/// Dispatcher for the primary SRC section's free-form details.
///
/// Wraps any [`Registry`] of SRC decoders. The dispatcher itself is
/// stateless; a single instance can serve concurrent calls.
pub struct SrcDispatcher<R> {
    registry: R,
}

impl<R> SrcDispatcher<R> {
    /// Create a dispatcher over a registry of SRC decoders.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Borrow the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Decode the details for one SRC.
    ///
    /// Returns the registered decoder's serialized output byte-for-byte,
    /// or [`EMPTY_SRC_DETAILS`] when the reference code cannot carry a
    /// component id, no decoder is registered for the id, or the decoder
    /// breaks its contract (fails, or returns an empty buffer). None of
    /// those paths are errors from the caller's point of view.
    pub fn dispatch<D>(&self, src: &SrcData<'_>) -> String
    where
        R: Registry<ComponentId, D>,
        D: SrcDecoder,
    {
        let id = match src.component_id() {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(%err, "reference code carries no component id");
                return EMPTY_SRC_DETAILS.to_owned();
            }
        };

        match self.registry.resolve(&id) {
            Resolution::Resolved(decoder) => match decoder.decode(src) {
                Ok(out) if !out.is_empty() => out,
                Ok(_) => {
                    tracing::warn!(component = %id, "SRC decoder returned an empty buffer");
                    EMPTY_SRC_DETAILS.to_owned()
                }
                Err(err) => {
                    tracing::warn!(component = %id, %err, "SRC decoder failed, falling back");
                    EMPTY_SRC_DETAILS.to_owned()
                }
            },
            Resolution::Unknown => {
                tracing::debug!(component = %id, "no SRC decoder registered");
                EMPTY_SRC_DETAILS.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SrcDispatcher;
    use crate::testing::{FailingDecoder, FixedDecoder};
    use peldec_core::{ComponentId, EMPTY_SRC_DETAILS, RegistryBuilder, SrcData, SrcDecoder};

    use crate::registry::MapRegistryBuilder;

    const WORDS: [&str; 8] = [
        "02020202", "03030303", "04040404", "05050505", "06060606", "07070707", "08080808",
        "09090909",
    ];

    #[test]
    fn unknown_component_falls_back() {
        let registry = MapRegistryBuilder::<ComponentId, FixedDecoder>::default()
            .build()
            .unwrap();
        let dispatcher = SrcDispatcher::new(registry);

        let out = dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS));
        assert_eq!(out, EMPTY_SRC_DETAILS);
    }

    #[test]
    fn failing_decoder_falls_back() {
        let mut builder: MapRegistryBuilder<ComponentId, Box<dyn SrcDecoder>> =
            MapRegistryBuilder::default();
        builder
            .insert("e5".parse().unwrap(), Box::new(FailingDecoder))
            .unwrap();
        let dispatcher = SrcDispatcher::new(builder.build().unwrap());

        let out = dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS));
        assert_eq!(out, EMPTY_SRC_DETAILS);
    }

    #[test]
    fn empty_decoder_output_falls_back() {
        let mut builder: MapRegistryBuilder<ComponentId, Box<dyn SrcDecoder>> =
            MapRegistryBuilder::default();
        builder
            .insert("e5".parse().unwrap(), Box::new(FixedDecoder::new("")))
            .unwrap();
        let dispatcher = SrcDispatcher::new(builder.build().unwrap());

        let out = dispatcher.dispatch(&SrcData::new("BMC1E50012345678", WORDS));
        assert_eq!(out, EMPTY_SRC_DETAILS);
    }
}
