//! Per-component user-data dispatch.
//!
//! A component's user-data decoder is a small finite table from subtype
//! to decode function plus a default arm for everything else. After the
//! subtype decoder runs, the dispatcher unconditionally appends a hex
//! dump of the full payload after all decoder fields, preserving their
//! order, and serializes the result.

use std::collections::HashMap;

use peldec_core::{FieldMap, SubtypeDecodeFn, UserDataDecoder, UserDataSection};

use crate::hexdump::hexdump;

/// Field name of the appended raw-payload rendering.
pub const HEX_DUMP_FIELD: &str = "Hex Dump";

/// Default decode function for subtypes a component does not support.
///
/// An unknown subtype is an expected outcome, reported as a warning
/// field rather than an error.
pub fn unsupported_subtype(_version: u8, _data: &[u8]) -> FieldMap {
    let mut out = FieldMap::new();
    out.insert("Warning", "Unsupported user data type");
    out
}

/// Subtype-to-decoder table for one component's user-data sections.
///
/// Implements [`UserDataDecoder`], so a table is a complete per-component
/// decoder on its own.
pub struct SubtypeTable {
    decoders: HashMap<u8, SubtypeDecodeFn>,
    default: SubtypeDecodeFn,
}

impl SubtypeTable {
    /// Build a table from `(subtype, decoder)` pairs.
    ///
    /// A repeated subtype keeps the last pair. Subtypes not listed route
    /// to [`unsupported_subtype`].
    pub fn new(entries: &[(u8, SubtypeDecodeFn)]) -> Self {
        Self {
            decoders: entries.iter().copied().collect(),
            default: unsupported_subtype,
        }
    }

    /// Replace the default decode function.
    pub fn with_default(mut self, default: SubtypeDecodeFn) -> Self {
        self.default = default;
        self
    }

    /// Decode one section: subtype decoder fields first, hex dump last.
    pub fn decode(&self, section: &UserDataSection<'_>) -> String {
        let decode = match self.decoders.get(&section.subtype) {
            Some(f) => *f,
            None => {
                tracing::debug!(subtype = section.subtype, "no subtype decoder, using default");
                self.default
            }
        };

        let mut out = decode(section.version, section.data);
        out.insert(HEX_DUMP_FIELD, hexdump(section.data));
        out.to_json()
    }
}

impl UserDataDecoder for SubtypeTable {
    fn decode(&self, section: &UserDataSection<'_>) -> String {
        SubtypeTable::decode(self, section)
    }
}

#[cfg(test)]
mod tests {
    use super::{HEX_DUMP_FIELD, SubtypeTable};
    use crate::hexdump::hexdump;
    use peldec_core::{FieldMap, UserDataSection};

    fn fields_ab(_version: u8, _data: &[u8]) -> FieldMap {
        FieldMap::new().with("A", 1u64).with("B", 2u64)
    }

    #[test]
    fn decoder_fields_precede_the_hex_dump() {
        let table = SubtypeTable::new(&[(1, fields_ab)]);
        let out = table.decode(&UserDataSection::new(1, 1, &[0xab]));

        let a = out.find("\"A\"").unwrap();
        let b = out.find("\"B\"").unwrap();
        let dump = out.find("\"Hex Dump\"").unwrap();
        assert!(a < b && b < dump);
    }

    #[test]
    fn unknown_subtype_routes_to_default() {
        let table = SubtypeTable::new(&[(1, fields_ab)]);
        let out = table.decode(&UserDataSection::new(9, 1, b""));

        let expected = FieldMap::new()
            .with("Warning", "Unsupported user data type")
            .with(HEX_DUMP_FIELD, hexdump(b""))
            .to_json();
        assert_eq!(out, expected);
    }

    #[test]
    fn hex_dump_depends_only_on_the_payload() {
        let table = SubtypeTable::new(&[(1, fields_ab)]);
        let payload = [0x00, 0x01, 0x02];

        // The serialized hex-dump field must be identical no matter which
        // subtype or version produced the surrounding output.
        let dumps: Vec<String> = [(1u8, 1u8), (1, 7), (42, 0)]
            .iter()
            .map(|&(subtype, version)| {
                let out = table.decode(&UserDataSection::new(subtype, version, &payload));
                out[out.find("\"Hex Dump\"").unwrap()..].to_owned()
            })
            .collect();
        assert!(dumps.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
