//! Testing utilities for peldec.
//!
//! Test doubles for exercising dispatch behavior:
//!
//! - [`FixedDecoder`]: returns a fixed serialized payload
//! - [`FailingDecoder`]: always fails, for exercising the fallback boundary
//! - [`RecordingDecoder`]: records the reference codes it is asked to decode

use std::sync::{Arc, Mutex};

use peldec_core::{BoxError, SrcData, SrcDecoder};

// ============================================================================
// Fixed Decoder
// ============================================================================

/// A decoder that returns a fixed serialized payload.
///
/// Useful for pass-through assertions: whatever this returns must come
/// out of the dispatcher byte-for-byte.
pub struct FixedDecoder {
    output: String,
}

impl FixedDecoder {
    /// Create a decoder returning `output`.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl SrcDecoder for FixedDecoder {
    fn decode(&self, _src: &SrcData<'_>) -> Result<String, BoxError> {
        Ok(self.output.clone())
    }
}

// ============================================================================
// Failing Decoder
// ============================================================================

/// A decoder that always fails.
///
/// The dispatcher must convert the failure into the fallback token
/// instead of letting it escape.
pub struct FailingDecoder;

impl SrcDecoder for FailingDecoder {
    fn decode(&self, _src: &SrcData<'_>) -> Result<String, BoxError> {
        Err("decoder failure injected by test".into())
    }
}

// ============================================================================
// Recording Decoder
// ============================================================================

/// A decoder that records every reference code it is asked to decode.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingDecoder::new(r#"{"Seen": 1}"#);
/// let handle = recorder.clone();
///
/// // register `recorder`, dispatch...
///
/// assert_eq!(handle.seen(), ["BMC1E50012345678"]);
/// ```
pub struct RecordingDecoder {
    seen: Arc<Mutex<Vec<String>>>,
    output: String,
}

impl RecordingDecoder {
    /// Create a recording decoder returning `output`.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
            output: output.into(),
        }
    }

    /// Reference codes seen so far, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    /// Number of decode calls.
    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Clone for RecordingDecoder {
    fn clone(&self) -> Self {
        Self {
            seen: self.seen.clone(),
            output: self.output.clone(),
        }
    }
}

impl SrcDecoder for RecordingDecoder {
    fn decode(&self, src: &SrcData<'_>) -> Result<String, BoxError> {
        self.seen.lock().unwrap().push(src.reference_code().to_owned());
        Ok(self.output.clone())
    }
}
