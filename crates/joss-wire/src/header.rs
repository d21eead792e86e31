use crate::constants::{STREAM_MAGIC, STREAM_VERSION};
use crate::cursor::Cursor;
use crate::error::WireError;

/// The 4-byte stream header — two Big-Endian u16 fields.
///
/// ```text
/// ┌────────┬─────────┬───────────────────────────┐
/// │ Offset │ Size    │ Description               │
/// ├────────┼─────────┼───────────────────────────┤
/// │ 0x00   │ 2 bytes │ Magic: 0xACED             │
/// │ 0x02   │ 2 bytes │ Version: 0x0005           │
/// └────────┴─────────┴───────────────────────────┘
/// ```
///
/// Validation order matters: magic first (is this a serialization
/// stream at all?), then version. A failed header means nothing after
/// it is decoded and no handle is ever allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamHeader {
    pub magic: u16,
    pub version: u16,
}

impl StreamHeader {
    /// Consume and validate the header from the front of the buffer.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the buffer is shorter than 4 bytes.
    /// - [`WireError::InvalidMagic`] if the magic field is not `0xACED`.
    /// - [`WireError::UnsupportedVersion`] if the version is not `0x0005`.
    pub fn read_from(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        let magic = cursor.u16()?;
        if magic != STREAM_MAGIC {
            return Err(WireError::InvalidMagic { found: magic });
        }

        let version = cursor.u16()?;
        if version != STREAM_VERSION {
            return Err(WireError::UnsupportedVersion { found: version });
        }

        Ok(Self { magic, version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_header_parses() {
        let mut cursor = Cursor::new(&[0xAC, 0xED, 0x00, 0x05]);
        let header = StreamHeader::read_from(&mut cursor).unwrap();
        assert_eq!(header.magic, STREAM_MAGIC);
        assert_eq!(header.version, STREAM_VERSION);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn reject_bad_magic() {
        let mut cursor = Cursor::new(&[0xCA, 0xFE, 0x00, 0x05]);
        let err = StreamHeader::read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, WireError::InvalidMagic { found: 0xCAFE }));
    }

    #[test]
    fn reject_bad_version() {
        let mut cursor = Cursor::new(&[0xAC, 0xED, 0x00, 0x06]);
        let err = StreamHeader::read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, WireError::UnsupportedVersion { found: 6 }));
    }

    #[test]
    fn reject_truncated_header() {
        let mut cursor = Cursor::new(&[0xAC]);
        let err = StreamHeader::read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, WireError::UnexpectedEof { offset: 0 }));
    }
}
