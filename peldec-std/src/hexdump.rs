//! Raw-byte rendering for diagnostic output.
//!
//! Used by the user-data dispatcher to append a debug view of the full
//! payload, and available to plugins that want to show undecoded bytes.

use std::fmt::Write as _;

const BYTES_PER_LINE: usize = 16;

// 32 hex digits + 15 separators + 1 extra gap between the halves.
const HEX_COLUMN_WIDTH: usize = 48;

/// Render a byte buffer as offset-prefixed hex lines with an ASCII
/// gutter.
///
/// The output is a deterministic function of the bytes alone. Sixteen
/// bytes per line, halves separated by an extra space, non-printable
/// bytes shown as `.`:
///
/// ```text
/// 00000000:  30 31 32 33 34 35 36 37  38 39 3a 3b 3c 3d 3e 3f  |0123456789:;<=>?|
/// ```
///
/// An empty buffer renders as the empty string.
pub fn hexdump(data: &[u8]) -> String {
    let mut lines = Vec::with_capacity(data.len().div_ceil(BYTES_PER_LINE));

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let mut hex = String::with_capacity(HEX_COLUMN_WIDTH);
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                hex.push(' ');
                if i == BYTES_PER_LINE / 2 {
                    hex.push(' ');
                }
            }
            let _ = write!(hex, "{byte:02x}");
        }
        // Pad short lines so the ASCII gutter stays aligned.
        while hex.len() < HEX_COLUMN_WIDTH {
            hex.push(' ');
        }

        let ascii: String = chunk
            .iter()
            .map(|b| {
                if b.is_ascii_graphic() || *b == b' ' {
                    *b as char
                } else {
                    '.'
                }
            })
            .collect();

        lines.push(format!("{:08x}:  {hex}  |{ascii}|", line * BYTES_PER_LINE));
    }

    lines.join("\n")
}

/// Format one 32-bit word as eight lowercase hex digits.
pub fn hexword(word: u32) -> String {
    format!("{word:08x}")
}

#[cfg(test)]
mod tests {
    use super::{hexdump, hexword};

    #[test]
    fn full_line_layout() {
        let data: Vec<u8> = (0x30..0x40).collect();
        assert_eq!(
            hexdump(&data),
            "00000000:  30 31 32 33 34 35 36 37  38 39 3a 3b 3c 3d 3e 3f  |0123456789:;<=>?|"
        );
    }

    #[test]
    fn short_line_is_padded() {
        assert_eq!(
            hexdump(&[0x00, 0x01]),
            format!("00000000:  {:<48}  |..|", "00 01")
        );
    }

    #[test]
    fn multiple_lines_carry_offsets() {
        let data = vec![0u8; 17];
        let dump = hexdump(&data);
        let lines: Vec<&str> = dump.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000:  "));
        assert!(lines[1].starts_with("00000010:  "));
        assert!(lines[1].ends_with("|.|"));
    }

    #[test]
    fn empty_buffer_renders_empty() {
        assert_eq!(hexdump(&[]), "");
    }

    #[test]
    fn non_printable_bytes_become_dots() {
        let dump = hexdump(&[0x00, 0x41, 0x7f, 0x20]);
        assert!(dump.ends_with("|.A. |"));
    }

    #[test]
    fn hexword_is_zero_padded() {
        assert_eq!(hexword(0xe5), "000000e5");
        assert_eq!(hexword(0xdeadbeef), "deadbeef");
    }
}
