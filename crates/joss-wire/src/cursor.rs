use crate::error::WireError;

/// A forward-only cursor over a read-only byte buffer.
///
/// All multi-byte reads are Big-Endian, as the serialization protocol
/// requires. The cursor never seeks backward; back-references are
/// resolved through the decoder's handle table, not by rewinding.
///
/// Every read that would run past the end of the buffer fails with
/// [`WireError::UnexpectedEof`] carrying the current position.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn has_remaining(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Look at the next byte without consuming it.
    pub fn peek(&self) -> Result<u8, WireError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(WireError::UnexpectedEof { offset: self.pos })
    }

    /// Consume `n` bytes and return them as a subslice of the buffer.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < n {
            return Err(WireError::UnexpectedEof { offset: self.pos });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn u8(&mut self) -> Result<u8, WireError> {
        let byte = self.peek()?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn i8(&mut self) -> Result<i8, WireError> {
        Ok(self.u8()? as i8)
    }

    pub fn u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn i16(&mut self) -> Result<i16, WireError> {
        Ok(self.u16()? as i16)
    }

    pub fn u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn i32(&mut self) -> Result<i32, WireError> {
        Ok(self.u32()? as i32)
    }

    pub fn i64(&mut self) -> Result<i64, WireError> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(i64::from_be_bytes(raw))
    }

    pub fn f32(&mut self) -> Result<f32, WireError> {
        Ok(f32::from_bits(self.u32()?))
    }

    pub fn f64(&mut self) -> Result<f64, WireError> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(f64::from_be_bytes(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_reads_advance_in_order() {
        let mut cursor = Cursor::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(cursor.u16().unwrap(), 0x0102);
        assert_eq!(cursor.u32().unwrap(), 0x0304_0506);
        assert_eq!(cursor.position(), 6);
        assert!(!cursor.has_remaining());
    }

    #[test]
    fn signed_reads_sign_extend() {
        let mut cursor = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFD]);
        assert_eq!(cursor.i32().unwrap(), -3);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = Cursor::new(&[0x70]);
        assert_eq!(cursor.peek().unwrap(), 0x70);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.u8().unwrap(), 0x70);
    }

    #[test]
    fn eof_carries_offset() {
        let mut cursor = Cursor::new(&[0x01, 0x02]);
        cursor.u16().unwrap();
        let err = cursor.u32().unwrap_err();
        assert!(matches!(err, WireError::UnexpectedEof { offset: 2 }));
    }

    #[test]
    fn take_returns_borrowed_subslice() {
        let buf = [0xAA, 0xBB, 0xCC];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(cursor.take(2).unwrap(), &[0xAA, 0xBB]);
        assert_eq!(cursor.remaining(), 1);
        assert!(cursor.take(2).is_err());
    }

    #[test]
    fn float_reads_are_ieee754_big_endian() {
        let bytes = 1.5f64.to_be_bytes();
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.f64().unwrap(), 1.5);
    }
}
