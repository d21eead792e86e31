//! Modified UTF-8 transcoding.
//!
//! The serialization protocol reuses `DataInput`'s string encoding,
//! which differs from standard UTF-8: code points above `U+FFFF` are
//! written as a surrogate pair of two 3-byte sequences, and `U+0000`
//! is written as the 2-byte sequence `0xC0 0x80`. Decoding therefore
//! produces UTF-16 code units first and converts to a `String` at the
//! end (unpaired surrogates become the replacement character).

use crate::error::WireError;

/// Decode a modified-UTF-8 byte range into a `String`.
///
/// `base_offset` is the position of `bytes[0]` in the surrounding
/// stream, so malformed-input errors can report absolute offsets.
///
/// # Errors
///
/// - [`WireError::MalformedUtf`] if a leading byte is illegal
///   (`10xxxxxx` or `1111xxxx`) or a continuation byte lacks the
///   required `10xxxxxx` high bits.
/// - [`WireError::PartialUtfCharacter`] if a multi-byte sequence runs
///   past the end of the range.
pub fn decode(bytes: &[u8], base_offset: usize) -> Result<String, WireError> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        let c = bytes[index];
        match c >> 4 {
            // 0xxxxxxx — single byte.
            0..=7 => {
                units.push(u16::from(c));
                index += 1;
            }

            // 110xxxxx 10xxxxxx — two bytes.
            12 | 13 => {
                if index + 2 > bytes.len() {
                    return Err(WireError::PartialUtfCharacter {
                        offset: base_offset + bytes.len(),
                    });
                }
                let c2 = bytes[index + 1];
                if c2 & 0xC0 != 0x80 {
                    return Err(WireError::MalformedUtf {
                        offset: base_offset + index + 1,
                    });
                }
                units.push((u16::from(c) & 0x1F) << 6 | (u16::from(c2) & 0x3F));
                index += 2;
            }

            // 1110xxxx 10xxxxxx 10xxxxxx — three bytes.
            14 => {
                if index + 3 > bytes.len() {
                    return Err(WireError::PartialUtfCharacter {
                        offset: base_offset + bytes.len(),
                    });
                }
                let c2 = bytes[index + 1];
                let c3 = bytes[index + 2];
                if c2 & 0xC0 != 0x80 || c3 & 0xC0 != 0x80 {
                    return Err(WireError::MalformedUtf {
                        offset: base_offset + index + 2,
                    });
                }
                units.push(
                    (u16::from(c) & 0x0F) << 12
                        | (u16::from(c2) & 0x3F) << 6
                        | (u16::from(c3) & 0x3F),
                );
                index += 3;
            }

            // 10xxxxxx and 1111xxxx are never legal leading bytes.
            _ => {
                return Err(WireError::MalformedUtf {
                    offset: base_offset + index,
                });
            }
        }
    }

    Ok(String::from_utf16_lossy(&units))
}

/// Encode a string into modified UTF-8.
///
/// Used by test fixture writers; the decoder itself never encodes.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for unit in text.encode_utf16() {
        match unit {
            // U+0000 uses the overlong 2-byte form.
            0x0000 => out.extend_from_slice(&[0xC0, 0x80]),
            0x0001..=0x007F => out.push(unit as u8),
            0x0080..=0x07FF => {
                out.push(0xC0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
    out
}
