//! Decoder plugin contracts.
//!
//! A component decoder is a leaf function hosted by the dispatch
//! framework: it receives a record fragment and produces serialized
//! structured text. The contracts here are deliberately narrow so that
//! every path through dispatch yields a valid payload: the surrounding
//! log renderer treats "no valid payload" as a hard error for the whole
//! record, so absence and failure both have to surface as well-formed
//! output rather than as propagated errors.

use crate::error::BoxError;
use crate::record::{SrcData, UserDataSection};
use crate::value::FieldMap;

/// Serialized form of "no additional detail" for the primary SRC section.
///
/// This is the JSON encoding of an empty string. Downstream consumers
/// fault on an empty or missing payload but accept an empty value, which
/// appends an empty details entry to the section and nothing more. Kept
/// wire-compatible with the historical behavior; use this constant rather
/// than re-deriving the token.
pub const EMPTY_SRC_DETAILS: &str = "\"\"";

/// A component-specific decoder for the primary SRC section.
///
/// Implementations are pure functions of the record fragment: the same
/// input must produce the same output, with no retained state. On success
/// the returned text must be valid serialized JSON and non-empty; the
/// dispatcher splices it into the section verbatim. Returning an error
/// does not abort the record; the dispatcher degrades to
/// [`EMPTY_SRC_DETAILS`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot decode primary SRC data",
    label = "missing `SrcDecoder` implementation",
    note = "Implement `SrcDecoder` to register this type for a component id."
)]
pub trait SrcDecoder: Send + Sync {
    /// Decode the reference code and data words into serialized JSON text.
    fn decode(&self, src: &SrcData<'_>) -> Result<String, BoxError>;
}

impl<D: SrcDecoder + ?Sized> SrcDecoder for &D {
    fn decode(&self, src: &SrcData<'_>) -> Result<String, BoxError> {
        (**self).decode(src)
    }
}

impl<D: SrcDecoder + ?Sized> SrcDecoder for Box<D> {
    fn decode(&self, src: &SrcData<'_>) -> Result<String, BoxError> {
        (**self).decode(src)
    }
}

/// A component's user-data section decoder.
///
/// One implementation per component. The viewer routes a section to the
/// component named in its header and splices the returned text as the
/// section's entire rendered content, so the output must always be valid
/// serialized JSON: unsupported subtypes and undecodable payloads are
/// reported as fields, never as errors.
pub trait UserDataDecoder: Send + Sync {
    /// Decode one user-data section into serialized JSON text.
    fn decode(&self, section: &UserDataSection<'_>) -> String;
}

/// A subtype-specific user-data decode function.
///
/// Infallible by signature: inability to decode is expressed as a
/// diagnostic field in the returned mapping. The `version` argument
/// selects layout revisions within the decoder's own logic.
pub type SubtypeDecodeFn = fn(version: u8, data: &[u8]) -> FieldMap;
