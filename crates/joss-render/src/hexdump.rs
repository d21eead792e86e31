//! Hex + printable-ASCII dump — the documented fallback rendering for
//! buffers that fail to decode.

use std::fmt::Write as _;

/// Format bytes as a 16-bytes-per-line hex dump with an offset column
/// and a printable-ASCII gutter.
///
/// ```text
/// 0000  ac ed 00 05 73 72 00 04 4c 69 73 74 69 c8 8a 15  ....sr..Listi...
/// 0010  40 16 ae 68 02 00 02 49 00 05 76 61 6c 75 65 4c  @..h...I..valueL
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);

    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offset = i * 16;

        let mut hex = String::with_capacity(chunk.len() * 3);
        for byte in chunk {
            if !hex.is_empty() {
                hex.push(' ');
            }
            let _ = write!(hex, "{byte:02x}");
        }

        let ascii: String = chunk
            .iter()
            .map(|&byte| if byte.is_ascii_graphic() { byte as char } else { '.' })
            .collect();

        let _ = writeln!(out, "{offset:04x}  {hex:<47}  {ascii}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_buffer_is_one_padded_line() {
        let out = hex_dump(&[0xAC, 0xED]);
        assert_eq!(out, format!("0000  {:<47}  ..\n", "ac ed"));
    }

    #[test]
    fn printable_bytes_show_in_the_gutter() {
        let out = hex_dump(b"List");
        assert!(out.ends_with("List\n"));
    }

    #[test]
    fn lines_break_every_sixteen_bytes() {
        let out = hex_dump(&[0u8; 20]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().nth(1).unwrap().starts_with("0010"));
    }
}
