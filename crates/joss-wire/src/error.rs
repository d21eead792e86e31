/// Errors raised by wire-level reads: cursor exhaustion, header
/// validation, and modified-UTF-8 transcoding.
///
/// Every variant that can point at a byte position carries an `offset`
/// measured from the start of the input buffer. When debugging a corrupt
/// stream, that offset is the first thing you want.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a complete fixed-width value could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// The first two bytes were not the stream magic `0xACED`.
    #[error("invalid stream magic: expected 0xACED, got {found:#06X}")]
    InvalidMagic { found: u16 },

    /// The version field did not match the supported stream version.
    #[error("unsupported stream version {found:#06X} (expected 0x0005)")]
    UnsupportedVersion { found: u16 },

    /// A modified-UTF-8 sequence had a continuation byte without the
    /// required `10xxxxxx` high bits, or an illegal leading byte.
    #[error("malformed modified-UTF-8 input around offset {offset}")]
    MalformedUtf { offset: usize },

    /// A modified-UTF-8 multi-byte sequence was cut off by the end of
    /// the string's byte range.
    #[error("malformed modified-UTF-8 input: partial character at offset {offset}")]
    PartialUtfCharacter { offset: usize },
}
