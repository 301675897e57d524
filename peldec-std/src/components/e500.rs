//! Hardware-diagnostics component (`e5`, creator id 0xE500).
//!
//! The analyzer packs its root-cause signature into SRC words 6 through 8
//! at log time; user-data sections carry the raw signature, register, and
//! guard captures. The user-data payload parsers are placeholders until
//! the capture formats settle, but the section routing and the SRC word
//! layout are final.

use peldec_core::{BoxError, DecodeError, FieldMap, SrcData, SrcDecoder};

use crate::dispatch::SubtypeTable;

/// Component id string for this plugin.
pub const COMPONENT: &str = "e5";

/// User-data subtype carrying the signature list.
pub const SUBTYPE_SIGNATURES: u8 = 0x01;
/// User-data subtype carrying the register dump.
pub const SUBTYPE_REGISTER_DUMP: u8 = 0x02;
/// User-data subtype carrying the guard list.
pub const SUBTYPE_GUARD_LIST: u8 = 0x03;

/// Parser for the signature list.
pub fn parse_signature_list(_version: u8, _data: &[u8]) -> FieldMap {
    let mut out = FieldMap::new();
    out.insert("Warning", "User data parser TBD");
    out
}

/// Parser for the register dump.
pub fn parse_register_dump(_version: u8, _data: &[u8]) -> FieldMap {
    let mut out = FieldMap::new();
    out.insert("Warning", "User data parser TBD");
    out
}

/// Parser for the guard list.
pub fn parse_guard_list(_version: u8, _data: &[u8]) -> FieldMap {
    let mut out = FieldMap::new();
    out.insert("Warning", "User data parser TBD");
    out
}

/// The user-data decoder for this component.
pub fn user_data_decoder() -> SubtypeTable {
    SubtypeTable::new(&[
        (SUBTYPE_SIGNATURES, parse_signature_list),
        (SUBTYPE_REGISTER_DUMP, parse_register_dump),
        (SUBTYPE_GUARD_LIST, parse_guard_list),
    ])
}

/// SRC decoder for this component.
///
/// Word layout, as packed by the analyzer:
///
/// - word 6: chip type (model and EC level)
/// - word 7: `[31:16]` chip position, `[15:8]` node position,
///   `[7:0]` attention type
/// - word 8: `[31:16]` signature id, `[15:8]` instance,
///   `[7:0]` bit position
///
/// Word 9 is currently unused.
#[derive(Clone, Copy, Debug, Default)]
pub struct E500SrcDecoder;

impl SrcDecoder for E500SrcDecoder {
    fn decode(&self, src: &SrcData<'_>) -> Result<String, BoxError> {
        let word6 = word_u32(src, 6)?;
        let word7 = word_u32(src, 7)?;
        let word8 = word_u32(src, 8)?;

        let mut out = FieldMap::new();
        out.insert("Chip Type", format!("0x{word6:08x}"));
        out.insert("Chip Position", word7 >> 16);
        out.insert("Node Position", (word7 >> 8) & 0xff);
        out.insert("Attention Type", attn_type_name(word7 & 0xff));
        out.insert("Signature ID", format!("0x{:04x}", word8 >> 16));
        out.insert("Signature Instance", (word8 >> 8) & 0xff);
        out.insert("Signature Bit", word8 & 0xff);

        Ok(out.to_json())
    }
}

fn word_u32(src: &SrcData<'_>, n: usize) -> Result<u32, DecodeError> {
    let token = src.word(n).unwrap_or("");
    let digits = token.trim_start_matches("0x");
    u32::from_str_radix(digits, 16).map_err(|_| DecodeError::MalformedWord {
        word: n,
        token: token.to_owned(),
    })
}

fn attn_type_name(attn: u32) -> String {
    match attn {
        1 => "Checkstop".to_owned(),
        2 => "Unit Checkstop".to_owned(),
        3 => "Recoverable".to_owned(),
        4 => "Special Attention".to_owned(),
        5 => "Host Attention".to_owned(),
        other => format!("Unknown (0x{other:02x})"),
    }
}

#[cfg(test)]
mod tests {
    use super::{E500SrcDecoder, user_data_decoder};
    use peldec_core::{SrcData, SrcDecoder, UserDataSection};

    #[test]
    fn src_words_unpack_into_named_fields() {
        // chip 0x00200010, chip pos 2, node 0, recoverable attention,
        // signature 0xabcd instance 1 bit 22.
        let src = SrcData::new(
            "BMC1E50012345678",
            [
                "00000000", "00000000", "00000000", "00000000", "00200010", "00020003", "abcd0116",
                "00000000",
            ],
        );

        let out = E500SrcDecoder.decode(&src).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"{"Chip Type":"0x00200010","Chip Position":2,"Node Position":0,"#,
                r#""Attention Type":"Recoverable","Signature ID":"0xabcd","#,
                r#""Signature Instance":1,"Signature Bit":22}"#
            )
        );
    }

    #[test]
    fn malformed_word_is_a_decode_error() {
        let src = SrcData::new(
            "BMC1E50012345678",
            [
                "00000000", "00000000", "00000000", "00000000", "not-hex", "00000000", "00000000",
                "00000000",
            ],
        );
        assert!(E500SrcDecoder.decode(&src).is_err());
    }

    #[test]
    fn known_subtypes_are_placeholders() {
        let table = user_data_decoder();
        for subtype in [1u8, 2, 3] {
            let out = table.decode(&UserDataSection::new(subtype, 1, &[0x00]));
            assert!(out.starts_with(r#"{"Warning":"User data parser TBD""#));
        }
    }

    #[test]
    fn other_subtypes_are_unsupported() {
        let table = user_data_decoder();
        let out = table.decode(&UserDataSection::new(0xca, 1, &[0x00]));
        assert!(out.starts_with(r#"{"Warning":"Unsupported user data type""#));
    }
}
