#![warn(clippy::pedantic)]

//! Fixture writer for serialization-stream tests.
//!
//! [`StreamBuilder`] emits the wire format byte by byte. It is a test
//! tool, not a supported encoder: it writes exactly what it is told,
//! including invalid streams, which is precisely what the error-path
//! tests need.

use joss_wire::constants::{
    STREAM_MAGIC, STREAM_VERSION, TC_ARRAY, TC_BLOCKDATA, TC_BLOCKDATALONG, TC_CLASSDESC,
    TC_ENDBLOCKDATA, TC_ENUM, TC_LONGSTRING, TC_NULL, TC_OBJECT, TC_PROXYCLASSDESC, TC_REFERENCE,
    TC_STRING,
};
use joss_wire::mutf8;

/// A field descriptor to write into a class descriptor.
pub enum FieldSpec {
    /// One-letter primitive code and field name.
    Primitive(char, &'static str),
    /// Field name and declared object type (descriptor form).
    Object(&'static str, &'static str),
    /// Field name and declared array type (descriptor form).
    Array(&'static str, &'static str),
}

/// Byte-level stream writer.
///
/// Methods chain and consume `self`; `build` returns the bytes.
/// Structural helpers write exactly one grammar production each, so a
/// test composes them in stream order. `class_desc` deliberately stops
/// after the (empty) annotation block: the caller follows it with the
/// superclass — `null()` for none, or another `class_desc`.
pub struct StreamBuilder {
    bytes: Vec<u8>,
}

impl StreamBuilder {
    /// Start a stream with a valid header.
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
            .u16(STREAM_MAGIC)
            .u16(STREAM_VERSION)
    }

    /// Start from nothing, for header-level tests.
    pub fn bare() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    // ── Raw writes ────────────────────────────────────────────────────

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.bytes.push(value);
        self
    }

    pub fn u16(self, value: u16) -> Self {
        let bytes = value.to_be_bytes();
        self.raw(&bytes)
    }

    pub fn u32(self, value: u32) -> Self {
        let bytes = value.to_be_bytes();
        self.raw(&bytes)
    }

    pub fn i32(self, value: i32) -> Self {
        let bytes = value.to_be_bytes();
        self.raw(&bytes)
    }

    pub fn i64(self, value: i64) -> Self {
        let bytes = value.to_be_bytes();
        self.raw(&bytes)
    }

    /// Length-prefixed (u16) modified-UTF-8 text, the bare `readUTF`
    /// shape used for class and field names.
    pub fn utf(self, text: &str) -> Self {
        let encoded = mutf8::encode(text);
        let this = self.u16(encoded.len() as u16);
        this.raw(&encoded)
    }

    // ── Content elements ──────────────────────────────────────────────

    pub fn null(self) -> Self {
        self.u8(TC_NULL)
    }

    pub fn reference(self, handle: u32) -> Self {
        self.u8(TC_REFERENCE).u32(handle)
    }

    pub fn string(self, text: &str) -> Self {
        self.u8(TC_STRING).utf(text)
    }

    pub fn long_string(self, text: &str) -> Self {
        let encoded = mutf8::encode(text);
        let this = self.u8(TC_LONGSTRING).i64(encoded.len() as i64);
        this.raw(&encoded)
    }

    pub fn block_data(self, data: &[u8]) -> Self {
        let this = self.u8(TC_BLOCKDATA).u8(data.len() as u8);
        this.raw(data)
    }

    pub fn long_block_data(self, data: &[u8]) -> Self {
        let this = self.u8(TC_BLOCKDATALONG).i32(data.len() as i32);
        this.raw(data)
    }

    pub fn end_block_data(self) -> Self {
        self.u8(TC_ENDBLOCKDATA)
    }

    pub fn object_tag(self) -> Self {
        self.u8(TC_OBJECT)
    }

    pub fn array_tag(self) -> Self {
        self.u8(TC_ARRAY)
    }

    pub fn enum_tag(self) -> Self {
        self.u8(TC_ENUM)
    }

    // ── Class descriptors ─────────────────────────────────────────────

    /// Write a local class descriptor with an *empty* annotation block,
    /// up to but not including its superclass. Follow with `null()` or
    /// another descriptor.
    pub fn class_desc(self, name: &str, suid: i64, flags: u8, fields: &[FieldSpec]) -> Self {
        self.class_desc_open(name, suid, flags, fields).end_block_data()
    }

    /// Like `class_desc`, but stops before the annotation block so a
    /// test can put content elements in it.
    pub fn class_desc_open(self, name: &str, suid: i64, flags: u8, fields: &[FieldSpec]) -> Self {
        let mut this = self
            .u8(TC_CLASSDESC)
            .utf(name)
            .i64(suid)
            .u8(flags)
            .u16(fields.len() as u16);

        for field in fields {
            this = match field {
                FieldSpec::Primitive(code, field_name) => this.u8(*code as u8).utf(field_name),
                FieldSpec::Object(field_name, type_name) => {
                    this.u8(b'L').utf(field_name).string(type_name)
                }
                FieldSpec::Array(field_name, type_name) => {
                    this.u8(b'[').utf(field_name).string(type_name)
                }
            };
        }

        this
    }

    /// Write a proxy class descriptor with an empty annotation block,
    /// up to but not including its superclass.
    pub fn proxy_class_desc(self, interfaces: &[&str]) -> Self {
        let mut this = self.u8(TC_PROXYCLASSDESC).i32(interfaces.len() as i32);
        for interface in interfaces {
            this = this.utf(interface);
        }
        this.end_block_data()
    }
}

impl Default for StreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_written_first() {
        let bytes = StreamBuilder::new().null().build();
        assert_eq!(bytes, [0xAC, 0xED, 0x00, 0x05, 0x70]);
    }

    #[test]
    fn string_is_length_prefixed() {
        let bytes = StreamBuilder::bare().string("hi").build();
        assert_eq!(bytes, [0x74, 0x00, 0x02, b'h', b'i']);
    }
}
