//! Error types for peldec.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PelDecodeError`] - Top-level error type for all peldec operations
//! - [`ComponentIdError`] - Malformed component identifiers
//! - [`DecodeError`] - Plugin-internal decode faults
//! - [`RegistryError`] - Errors from registry construction
//!
//! Most "failures" in this subsystem are expected outcomes and never show
//! up as errors at all: a reference code with no registered decoder and a
//! user-data subtype with no table entry both degrade to well-defined
//! placeholder output at the dispatch boundary. The types here cover the
//! residue that is genuinely wrong: identifiers that cannot be extracted,
//! payloads a plugin cannot make sense of, and invalid registrations.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all peldec operations.
#[derive(Error, Debug)]
pub enum PelDecodeError {
    /// A component id could not be derived from the record.
    #[error("component id error: {0}")]
    ComponentId(#[from] ComponentIdError),

    /// A decoder plugin faulted on its input.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A registry could not be built.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors deriving a [`ComponentId`] from record data.
///
/// These never escape the dispatchers: a reference code that cannot carry
/// a component id resolves to the canonical fallback output instead.
///
/// [`ComponentId`]: crate::ComponentId
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentIdError {
    /// The reference code is too short to carry a component id.
    #[error("reference code too short to carry a component id ({len} bytes)")]
    TooShort {
        /// Byte length of the offending reference code.
        len: usize,
    },

    /// A component id string was not exactly two characters.
    #[error("component id must be exactly 2 characters, got {len}")]
    BadLength {
        /// Character count of the offending string.
        len: usize,
    },

    /// The id bytes are outside the ASCII alphanumeric range.
    #[error("component id bytes are not ASCII alphanumeric: {bytes:?}")]
    NotAscii {
        /// The offending bytes.
        bytes: [u8; 2],
    },
}

/// Faults a decoder plugin may hit while interpreting its bytes.
///
/// An SRC decoder may return any of these through [`SrcDecoder::decode`];
/// the dispatcher converts them into the fallback token rather than
/// letting them abort the record. User-data subtype decoders do not
/// return errors at all and instead surface problems as diagnostic
/// fields.
///
/// [`SrcDecoder::decode`]: crate::SrcDecoder::decode
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload ended before a required field.
    #[error("payload truncated: need {expected} bytes, have {actual}")]
    Truncated {
        /// Bytes required by the layout.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },

    /// The section's layout revision is not known to this decoder.
    #[error("unsupported layout version: {0}")]
    UnsupportedVersion(u8),

    /// A data word token did not parse as this component expects.
    #[error("malformed data word {word}: {token:?}")]
    MalformedWord {
        /// Word number (2..=9).
        word: usize,
        /// The offending token.
        token: String,
    },

    /// A custom decode error.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same key was registered twice.
    #[error("duplicate registration for key: {0}")]
    DuplicateKey(String),
}

// Convenience conversions
impl From<BoxError> for PelDecodeError {
    fn from(err: BoxError) -> Self {
        PelDecodeError::Custom(err)
    }
}

impl From<BoxError> for DecodeError {
    fn from(err: BoxError) -> Self {
        DecodeError::Custom(err)
    }
}
