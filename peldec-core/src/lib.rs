//! # peldec-core
//!
//! Core contracts for the peldec PEL section decoding framework.
//!
//! This crate has minimal dependencies and is what component decoder
//! plugins import; the standard registries, dispatchers, and built-in
//! components live in `peldec-std`.
//!
//! # Three-Layer Architecture
//!
//! ## Layer 1: Value Model ([`FieldMap`], [`FieldValue`])
//!
//! The intermediate representation every decoder produces: an ordered
//! field mapping over a closed union of JSON-representable values.
//! Insertion order survives serialization, and serialization cannot fail
//! by construction.
//!
//! ## Layer 2: Decoder Contracts ([`SrcDecoder`], [`UserDataDecoder`])
//!
//! The plugin surface. An SRC decoder interprets a reference code plus
//! eight data words; a user-data decoder interprets a subtype, version,
//! and raw payload. Both must always yield valid serialized output:
//! absence of detail and internal faults degrade to placeholder content
//! instead of propagating.
//!
//! ## Layer 3: Resolution ([`Registry`], [`Resolution`])
//!
//! Runtime dispatch from a [`ComponentId`] to a registered decoder.
//! Unknown ids resolve to [`Resolution::Unknown`], which the dispatchers
//! convert into [`EMPTY_SRC_DETAILS`].
//!
//! # Error Types
//!
//! - [`PelDecodeError`] - Top-level error type
//! - [`ComponentIdError`] - Malformed component identifiers
//! - [`DecodeError`] - Plugin-internal decode faults
//! - [`RegistryError`] - Registry construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod component;
mod decoder;
mod error;
mod record;
mod registry;
mod value;

// Re-exports
pub use component::{COMPONENT_ID_OFFSET, ComponentId};
pub use decoder::{EMPTY_SRC_DETAILS, SrcDecoder, SubtypeDecodeFn, UserDataDecoder};
pub use error::{BoxError, ComponentIdError, DecodeError, PelDecodeError, RegistryError};
pub use record::{SrcData, UserDataSection};
pub use registry::{Registry, RegistryBuilder, Resolution};
pub use value::{FieldMap, FieldValue};
