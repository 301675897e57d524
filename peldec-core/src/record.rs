//! Record fragments handed over by the PEL parser.
//!
//! The surrounding parser owns the file format; this crate only ever sees
//! the two fragments that need component-specific interpretation: the
//! primary SRC's reference code with its data words, and a user-data
//! section's header fields with its raw payload. Both are borrowed views,
//! created per dispatch call and discarded after serialization.

use crate::component::ComponentId;
use crate::error::ComponentIdError;

/// The primary SRC section's reference code and data words.
///
/// Words 2 through 9 accompany every reference code; words 0 and 1 are
/// framing and never reach a decoder. Each word is an opaque string token
/// whose meaning is component-defined, and a decoder may use any subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcData<'a> {
    reference_code: &'a str,
    words: [&'a str; 8],
}

impl<'a> SrcData<'a> {
    /// Bundle a reference code with its eight data words (words 2..=9).
    pub fn new(reference_code: &'a str, words: [&'a str; 8]) -> Self {
        Self {
            reference_code,
            words,
        }
    }

    /// The ASCII reference code.
    pub fn reference_code(&self) -> &'a str {
        self.reference_code
    }

    /// Data word `n`, for `n` in `2..=9`.
    pub fn word(&self, n: usize) -> Option<&'a str> {
        match n {
            2..=9 => Some(self.words[n - 2]),
            _ => None,
        }
    }

    /// All eight data words, in word order.
    pub fn words(&self) -> &[&'a str; 8] {
        &self.words
    }

    /// The component id embedded in the reference code.
    pub fn component_id(&self) -> Result<ComponentId, ComponentIdError> {
        ComponentId::from_reference_code(self.reference_code)
    }
}

/// One user-data section: subtype, layout version, raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDataSection<'a> {
    /// Selects the decoding rule within the owning component.
    pub subtype: u8,
    /// Selects a layout revision within a subtype decoder.
    pub version: u8,
    /// Raw section payload.
    pub data: &'a [u8],
}

impl<'a> UserDataSection<'a> {
    /// Bundle a section's header fields with its payload.
    pub fn new(subtype: u8, version: u8, data: &'a [u8]) -> Self {
        Self {
            subtype,
            version,
            data,
        }
    }
}
