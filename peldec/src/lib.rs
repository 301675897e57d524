//! # peldec - PEL vendor-section decode framework
//!
//! `peldec` dispatches the free-form parts of a Platform Event Log (the
//! primary SRC's data words and component-tagged user-data sections) to
//! component-specific decoders selected at runtime from identifiers
//! embedded in the record itself. When no decoder exists for a component,
//! dispatch degrades to a well-defined placeholder instead of failing, so
//! decoding one section can never abort rendering of the surrounding
//! record.
//!
//! ## Quick start
//!
//! ```
//! use peldec::{
//!     BoxError, ComponentId, EMPTY_SRC_DETAILS, MapRegistryBuilder, RegistryBuilder, SrcData,
//!     SrcDecoder, SrcDispatcher,
//! };
//!
//! struct Plugin;
//!
//! impl SrcDecoder for Plugin {
//!     fn decode(&self, src: &SrcData<'_>) -> Result<String, BoxError> {
//!         Ok(format!(r#"{{"Ref": "{}"}}"#, src.reference_code()))
//!     }
//! }
//!
//! let mut builder: MapRegistryBuilder<ComponentId, Box<dyn SrcDecoder>> =
//!     MapRegistryBuilder::default();
//! builder.insert("e5".parse()?, Box::new(Plugin))?;
//! let dispatcher = SrcDispatcher::new(builder.build()?);
//!
//! let words = ["00000000"; 8];
//! let hit = dispatcher.dispatch(&SrcData::new("BMC1E50012345678", words));
//! assert_eq!(hit, r#"{"Ref": "BMC1E50012345678"}"#);
//!
//! // No decoder registered for "ff": expected, not an error.
//! let miss = dispatcher.dispatch(&SrcData::new("BMC1FF0012345678", words));
//! assert_eq!(miss, EMPTY_SRC_DETAILS);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## User-data sections
//!
//! A component's user-data decoder is a [`SubtypeTable`]: a finite map
//! from subtype to decode function with a default arm, plus an appended
//! hex dump of the raw payload. See [`components::e500`] for the built-in
//! example.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use peldec_core::{
    // Identifiers
    COMPONENT_ID_OFFSET,
    ComponentId,
    // Error types
    BoxError,
    ComponentIdError,
    DecodeError,
    PelDecodeError,
    RegistryError,
    // Decoder contracts
    EMPTY_SRC_DETAILS,
    SrcDecoder,
    SubtypeDecodeFn,
    UserDataDecoder,
    // Records
    SrcData,
    UserDataSection,
    // Resolution
    Registry,
    RegistryBuilder,
    Resolution,
    // Value model
    FieldMap,
    FieldValue,
};

pub use peldec_std::{
    dispatch::{HEX_DUMP_FIELD, SrcDispatcher, SubtypeTable, unsupported_subtype},
    hexdump::{hexdump, hexword},
    registry::{MapRegistry, MapRegistryBuilder, TableRegistry},
};

#[cfg(feature = "phf")]
pub use peldec_std::registry::PhfRegistry;

#[cfg(feature = "inventory")]
pub use peldec_std::registry::{RegisteredSrcDecoder, collected_src_registry};

/// Built-in component decoder plugins.
pub mod components {
    #![allow(clippy::wildcard_imports)]
    pub use peldec_std::components::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use peldec_std::testing::*;
}

/// Prelude module - common imports for peldec.
///
/// # Usage
///
/// ```rust,ignore
/// use peldec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Identifiers
        ComponentId,
        // Fallback
        EMPTY_SRC_DETAILS,
        // Value model
        FieldMap,
        FieldValue,
        // Resolution
        Registry,
        RegistryBuilder,
        Resolution,
        // Records and contracts
        SrcData,
        SrcDecoder,
        SrcDispatcher,
        SubtypeTable,
        UserDataDecoder,
        UserDataSection,
    };
}

#[cfg(feature = "macros")]
pub use peldec_macros::src_decoder;

#[cfg(feature = "inventory")]
pub use inventory;
