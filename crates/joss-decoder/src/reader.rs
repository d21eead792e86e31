use std::collections::HashMap;
use std::rc::Rc;

use joss_types::{
    ClassDesc, ClassFlags, Field, LocalClassDesc, ObjectData, Primitive, ProxyClassDesc,
    Serialized, ancestry,
};
use joss_wire::constants::{BASE_WIRE_HANDLE, TC_ENDBLOCKDATA};
use joss_wire::{Cursor, StreamHeader, Tag, TypeCode, mutf8};

use crate::error::DecodeError;

/// Maximum structural nesting the reader will follow. Real streams stay
/// in the tens; the cap keeps a hostile stream of arrays-in-arrays from
/// exhausting the call stack.
const MAX_NESTING_DEPTH: usize = 128;

/// Decoder for one Java object-serialization byte buffer.
///
/// Construction validates the 4-byte header; after that the reader is
/// a lazy, finite, forward-only sequence of top-level values — iterate
/// it to pull one content element at a time, or call
/// [`read_all`](Self::read_all) to drain the buffer.
///
/// A reader is single-use: its handle table is scoped to this one
/// buffer and is discarded with the reader. Decoding the same bytes
/// again requires a fresh reader (and produces a value-equal but not
/// pointer-equal tree).
///
/// Any decode error is fatal. The iterator yields the error once and
/// then fuses; there is no partial-decode or resynchronization mode.
/// Structural nesting is capped (see `MAX_NESTING_DEPTH`), so a
/// hostile arrays-in-arrays stream errors instead of exhausting the
/// call stack.
///
/// # Example
///
/// ```rust
/// use joss_decoder::StreamReader;
///
/// // Header followed by a single TC_NULL content element.
/// let bytes = [0xAC, 0xED, 0x00, 0x05, 0x70];
/// let values = StreamReader::new(&bytes).unwrap().read_all().unwrap();
/// assert_eq!(values, vec![None]);
/// ```
#[derive(Debug)]
pub struct StreamReader<'a> {
    cursor: Cursor<'a>,
    header: StreamHeader,
    /// Next handle to assign, counting up from [`BASE_WIRE_HANDLE`] in
    /// the order structural values *begin* decoding.
    next_handle: u32,
    /// Handle table for back-references. Values are inserted once
    /// construction completes; their handle numbers were reserved
    /// before any nested reads.
    handles: HashMap<u32, Rc<Serialized>>,
    /// Current structural recursion depth, capped at
    /// [`MAX_NESTING_DEPTH`]. Only restored on success; a reader that
    /// errored is fused anyway.
    depth: usize,
    failed: bool,
}

impl<'a> StreamReader<'a> {
    /// Validate the stream header and construct a reader positioned at
    /// the first content element.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidHeader`] for a short buffer, wrong
    /// magic, or wrong version. No handle is allocated on failure.
    pub fn new(buf: &'a [u8]) -> Result<Self, DecodeError> {
        let mut cursor = Cursor::new(buf);
        let header = StreamHeader::read_from(&mut cursor).map_err(DecodeError::InvalidHeader)?;

        Ok(Self {
            cursor,
            header,
            next_handle: BASE_WIRE_HANDLE,
            handles: HashMap::new(),
            depth: 0,
            failed: false,
        })
    }

    /// The validated stream header.
    pub fn header(&self) -> StreamHeader {
        self.header
    }

    /// Number of handles assigned so far.
    pub fn handle_count(&self) -> u32 {
        self.next_handle - BASE_WIRE_HANDLE
    }

    /// Drain the buffer into a vector of top-level values.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] encountered; the values
    /// decoded before the failure are discarded.
    pub fn read_all(self) -> Result<Vec<Option<Rc<Serialized>>>, DecodeError> {
        self.collect()
    }

    // ── Handle table ──────────────────────────────────────────────────

    /// Reserve the next handle number. Called immediately after a
    /// structural element's header is parsed, before its contents are,
    /// so nested elements number themselves after their parent.
    fn reserve_handle(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn cache(&mut self, handle: u32, value: &Rc<Serialized>) {
        self.handles.insert(handle, Rc::clone(value));
    }

    /// Enter one level of structural recursion. Every routine that can
    /// recurse back into itself (objects, arrays, class descriptors)
    /// calls this on entry and decrements `depth` on its success path.
    fn enter_nested(&mut self) -> Result<(), DecodeError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(DecodeError::NestingTooDeep {
                offset: self.cursor.position(),
            });
        }
        Ok(())
    }

    // ── Dispatch ──────────────────────────────────────────────────────

    /// Decode one content element, dispatching on the peeked tag byte.
    fn read_content_element(&mut self) -> Result<Option<Rc<Serialized>>, DecodeError> {
        let offset = self.cursor.position();
        let byte = self.cursor.peek()?;

        match Tag::from_byte(byte) {
            Some(Tag::Object) => Ok(Some(self.read_new_object()?)),
            Some(Tag::Class) => Ok(Some(self.read_new_class()?)),
            Some(Tag::Array) => Ok(Some(self.read_new_array()?)),
            Some(Tag::String | Tag::LongString) => Ok(Some(self.read_new_string()?)),
            Some(Tag::Enum) => Ok(Some(self.read_new_enum()?)),
            Some(Tag::ClassDesc | Tag::ProxyClassDesc) => {
                // A bare descriptor as a top-level value.
                let desc = self.read_class_desc()?;
                Ok(desc.map(|desc| Rc::new(Serialized::ClassDesc(desc))))
            }
            Some(Tag::Reference) => Ok(Some(self.read_reference()?)),
            Some(Tag::Null) => self.read_null(),
            Some(Tag::BlockData) => Ok(Some(self.read_block_data()?)),
            Some(Tag::BlockDataLong) => Ok(Some(self.read_long_block_data()?)),
            // TC_ENDBLOCKDATA / TC_RESET / TC_EXCEPTION are not content
            // elements, and anything outside the tag range never is.
            _ => Err(DecodeError::UnexpectedTag { byte, offset }),
        }
    }

    // ── Objects ───────────────────────────────────────────────────────

    fn read_new_object(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::Object)?;
        self.enter_nested()?;

        let desc_offset = self.cursor.position();
        let class_desc = self
            .read_class_desc()?
            .ok_or(DecodeError::NullClassDesc { offset: desc_offset })?;

        let handle = self.reserve_handle();

        // Field data is serialized level by level, most-ancestral class
        // first, so walk the descriptor chain root-first.
        let mut chain = ancestry(&class_desc);
        chain.reverse();

        let mut class_data = Vec::with_capacity(chain.len());
        for desc in &chain {
            match desc.as_ref() {
                ClassDesc::Local(local) => {
                    let mut values = Vec::with_capacity(local.fields.len());
                    for field in &local.fields {
                        values.push(self.read_field_value(field.type_code())?);
                    }

                    // Classes that wrote custom data append content
                    // elements terminated by TC_ENDBLOCKDATA.
                    if local.flags.has_object_annotation() {
                        while self.cursor.peek()? != TC_ENDBLOCKDATA {
                            values.push(self.read_content_element()?);
                        }
                        self.expect_tag(Tag::EndBlockData)?;
                    }

                    class_data.push((local.name.clone(), values));
                }

                // Proxy levels carry no field table; record the level
                // under its first interface name.
                ClassDesc::Proxy(proxy) => {
                    let key = proxy.interface_names.first().cloned().unwrap_or_default();
                    class_data.push((key, Vec::new()));
                }
            }
        }

        let value = Rc::new(Serialized::Object(ObjectData {
            class_descs: chain,
            class_data,
        }));
        self.cache(handle, &value);
        self.depth -= 1;
        Ok(value)
    }

    // ── Class descriptors ─────────────────────────────────────────────

    /// Decode a class descriptor in any of its stream forms: a fresh
    /// local or proxy descriptor, a back-reference, or null.
    fn read_class_desc(&mut self) -> Result<Option<Rc<ClassDesc>>, DecodeError> {
        let offset = self.cursor.position();
        let byte = self.cursor.peek()?;

        match Tag::from_byte(byte) {
            Some(Tag::ClassDesc) => Ok(Some(self.read_local_class_desc()?)),
            Some(Tag::ProxyClassDesc) => Ok(Some(self.read_proxy_class_desc()?)),
            Some(Tag::Reference) => {
                let resolved = self.read_reference()?;
                let desc = resolved
                    .as_class_desc()
                    .ok_or(DecodeError::StructuralMismatch {
                        expected: "class descriptor",
                        offset,
                    })?;
                Ok(Some(Rc::clone(desc)))
            }
            Some(Tag::Null) => {
                self.expect_tag(Tag::Null)?;
                Ok(None)
            }
            _ => Err(DecodeError::UnexpectedTag { byte, offset }),
        }
    }

    fn read_local_class_desc(&mut self) -> Result<Rc<ClassDesc>, DecodeError> {
        self.expect_tag(Tag::ClassDesc)?;
        self.enter_nested()?;

        let name = self.read_utf()?;
        let serial_version_uid = self.cursor.i64()?;

        // Reserve the handle before flags and fields so nested reads
        // (annotation, superclass) number themselves after this one.
        let handle = self.reserve_handle();

        let flag_byte = self.cursor.u8()?;
        let flags = ClassFlags::from_byte(flag_byte)?;

        let field_count = self.cursor.u16()?;
        let mut fields = Vec::with_capacity(usize::from(field_count));
        for _ in 0..field_count {
            fields.push(self.read_field_desc()?);
        }

        let annotation_values = self.read_class_annotation()?;
        let annotation = if annotation_values.is_empty() {
            None
        } else {
            // Wrap the annotation elements into a synthetic object
            // keyed by this descriptor's own name.
            Some(ObjectData {
                class_descs: Vec::new(),
                class_data: vec![(name.clone(), annotation_values)],
            })
        };

        let super_class = self.read_class_desc()?;

        let desc = Rc::new(ClassDesc::Local(LocalClassDesc {
            name,
            serial_version_uid,
            flags,
            fields,
            annotation,
            super_class,
        }));
        let value = Rc::new(Serialized::ClassDesc(Rc::clone(&desc)));
        self.cache(handle, &value);
        self.depth -= 1;
        Ok(desc)
    }

    fn read_proxy_class_desc(&mut self) -> Result<Rc<ClassDesc>, DecodeError> {
        self.expect_tag(Tag::ProxyClassDesc)?;
        self.enter_nested()?;

        let handle = self.reserve_handle();

        let count_offset = self.cursor.position();
        let count = self.cursor.i32()?;
        if count < 0 {
            return Err(DecodeError::NegativeLength {
                length: i64::from(count),
                offset: count_offset,
            });
        }

        // The count is read before any name; a stream can claim more
        // interfaces than it has bytes. Reserve no more than could fit.
        let mut interface_names = Vec::with_capacity((count as usize).min(self.cursor.remaining()));
        for _ in 0..count {
            interface_names.push(self.read_utf()?);
        }

        // Proxies carry an annotation block too, but only the interface
        // names matter here; the elements are decoded and discarded.
        self.read_class_annotation()?;

        let super_class = self.read_class_desc()?;

        let desc = Rc::new(ClassDesc::Proxy(ProxyClassDesc {
            interface_names,
            super_class,
        }));
        let value = Rc::new(Serialized::ClassDesc(Rc::clone(&desc)));
        self.cache(handle, &value);
        self.depth -= 1;
        Ok(desc)
    }

    /// Decode content elements up to and including `TC_ENDBLOCKDATA`.
    fn read_class_annotation(&mut self) -> Result<Vec<Option<Rc<Serialized>>>, DecodeError> {
        let mut values = Vec::new();
        while self.cursor.peek()? != TC_ENDBLOCKDATA {
            values.push(self.read_content_element()?);
        }
        self.expect_tag(Tag::EndBlockData)?;
        Ok(values)
    }

    fn read_field_desc(&mut self) -> Result<Field, DecodeError> {
        let offset = self.cursor.position();
        let code_byte = self.cursor.u8()?;
        let code = TypeCode::from_byte(code_byte).ok_or(DecodeError::InvalidTypeCode {
            code: code_byte,
            offset,
        })?;

        let name = self.read_utf()?;

        match code {
            // Object and array fields carry their declared type as a
            // string *object* — it is handle-cached like any other.
            TypeCode::Object => {
                let type_name = self.read_string_value()?;
                Ok(Field::Object { name, type_name })
            }
            TypeCode::Array => {
                let component_type = self.read_string_value()?;
                Ok(Field::Array {
                    name,
                    component_type,
                })
            }
            _ => Ok(Field::Primitive {
                name,
                type_code: code,
            }),
        }
    }

    // ── Enums ─────────────────────────────────────────────────────────

    fn read_new_enum(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::Enum)?;

        let handle = self.reserve_handle();

        let desc_offset = self.cursor.position();
        let class_desc = self
            .read_class_desc()?
            .ok_or(DecodeError::NullClassDesc { offset: desc_offset })?;

        let constant_name = self.read_string_value()?;

        let value = Rc::new(Serialized::Enum {
            class_desc,
            constant_name,
        });
        self.cache(handle, &value);
        Ok(value)
    }

    // ── Arrays ────────────────────────────────────────────────────────

    fn read_new_array(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::Array)?;
        self.enter_nested()?;

        let desc_offset = self.cursor.position();
        let class_desc = self
            .read_class_desc()?
            .ok_or(DecodeError::NullClassDesc { offset: desc_offset })?;

        let component = match class_desc.as_ref() {
            ClassDesc::Local(local) => component_type_code(&local.name, desc_offset)?,
            ClassDesc::Proxy(_) => {
                return Err(DecodeError::StructuralMismatch {
                    expected: "local class descriptor for array",
                    offset: desc_offset,
                });
            }
        };

        let handle = self.reserve_handle();

        let len_offset = self.cursor.position();
        let len = self.cursor.i32()?;
        if len < 0 {
            return Err(DecodeError::NegativeLength {
                length: i64::from(len),
                offset: len_offset,
            });
        }

        // The length is read before any element; a stream can claim
        // more elements than it has bytes. Reserve no more than could
        // fit and let the element reads report the truncation.
        let mut elements = Vec::with_capacity((len as usize).min(self.cursor.remaining()));
        for _ in 0..len {
            elements.push(self.read_field_value(component)?);
        }

        let value = Rc::new(Serialized::Array(elements));
        self.cache(handle, &value);
        self.depth -= 1;
        Ok(value)
    }

    // ── Classes as values ─────────────────────────────────────────────

    fn read_new_class(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::Class)?;

        let desc_offset = self.cursor.position();
        let class_desc = self
            .read_class_desc()?
            .ok_or(DecodeError::NullClassDesc { offset: desc_offset })?;

        let handle = self.reserve_handle();
        let value = Rc::new(Serialized::ClassDesc(class_desc));
        self.cache(handle, &value);
        Ok(value)
    }

    // ── Field values ──────────────────────────────────────────────────

    /// Decode one field or array-element value, selected by type code.
    fn read_field_value(&mut self, code: TypeCode) -> Result<Option<Rc<Serialized>>, DecodeError> {
        if code.is_primitive() {
            let primitive = self.read_primitive(code)?;
            return Ok(Some(Rc::new(Serialized::Primitive(primitive))));
        }

        let offset = self.cursor.position();
        let byte = self.cursor.peek()?;
        let tag = Tag::from_byte(byte);

        match code {
            TypeCode::Array => match tag {
                Some(Tag::Null) => self.read_null(),
                Some(Tag::Array) => Ok(Some(self.read_new_array()?)),
                Some(Tag::Reference) => Ok(Some(self.read_reference()?)),
                _ => Err(DecodeError::UnexpectedTag { byte, offset }),
            },

            TypeCode::Object => match tag {
                Some(Tag::Object) => Ok(Some(self.read_new_object()?)),
                Some(Tag::Reference) => Ok(Some(self.read_reference()?)),
                Some(Tag::Null) => self.read_null(),
                Some(Tag::String | Tag::LongString) => Ok(Some(self.read_new_string()?)),
                Some(Tag::Class) => Ok(Some(self.read_new_class()?)),
                Some(Tag::Array) => Ok(Some(self.read_new_array()?)),
                Some(Tag::Enum) => Ok(Some(self.read_new_enum()?)),
                _ => Err(DecodeError::UnexpectedTag { byte, offset }),
            },

            _ => Err(DecodeError::InvalidTypeCode {
                code: code.as_char() as u8,
                offset,
            }),
        }
    }

    fn read_primitive(&mut self, code: TypeCode) -> Result<Primitive, DecodeError> {
        let offset = self.cursor.position();
        match code {
            // The protocol defines 0x00/0x01, but writers in the wild
            // emit other nonzero bytes; accept them all as true.
            TypeCode::Boolean => Ok(Primitive::Boolean(self.cursor.u8()? != 0)),
            TypeCode::Byte => Ok(Primitive::Byte(self.cursor.i8()?)),
            TypeCode::Short => Ok(Primitive::Short(self.cursor.i16()?)),
            TypeCode::Char => Ok(Primitive::Char(self.cursor.u16()?)),
            TypeCode::Int => Ok(Primitive::Int(self.cursor.i32()?)),
            TypeCode::Long => Ok(Primitive::Long(self.cursor.i64()?)),
            TypeCode::Float => Ok(Primitive::Float(self.cursor.f32()?)),
            TypeCode::Double => Ok(Primitive::Double(self.cursor.f64()?)),
            TypeCode::Object | TypeCode::Array => Err(DecodeError::InvalidTypeCode {
                code: code.as_char() as u8,
                offset,
            }),
        }
    }

    // ── Strings ───────────────────────────────────────────────────────

    /// Decode a string element: regular, long, or a back-reference that
    /// must resolve to a string.
    fn read_new_string(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        let offset = self.cursor.position();
        let byte = self.cursor.peek()?;

        match Tag::from_byte(byte) {
            Some(Tag::String) => self.read_string(),
            Some(Tag::LongString) => self.read_long_string(),
            Some(Tag::Reference) => {
                let resolved = self.read_reference()?;
                if resolved.as_string().is_none() {
                    return Err(DecodeError::StructuralMismatch {
                        expected: "string",
                        offset,
                    });
                }
                Ok(resolved)
            }
            _ => Err(DecodeError::UnexpectedTag { byte, offset }),
        }
    }

    /// [`read_new_string`](Self::read_new_string), unwrapped to the
    /// character data. Used where the grammar consumes a string for its
    /// text (enum constant names, field type names).
    fn read_string_value(&mut self) -> Result<String, DecodeError> {
        let offset = self.cursor.position();
        let value = self.read_new_string()?;
        let text = value.as_string().ok_or(DecodeError::StructuralMismatch {
            expected: "string",
            offset,
        })?;
        Ok(text.to_owned())
    }

    fn read_string(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::String)?;

        let handle = self.reserve_handle();
        let text = self.read_utf()?;

        let value = Rc::new(Serialized::UtfString(text));
        self.cache(handle, &value);
        Ok(value)
    }

    fn read_long_string(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::LongString)?;

        let handle = self.reserve_handle();

        let len_offset = self.cursor.position();
        let len = self.cursor.i64()?;
        let len = usize::try_from(len).map_err(|_| DecodeError::NegativeLength {
            length: len,
            offset: len_offset,
        })?;
        let text = self.read_utf_bytes(len)?;

        let value = Rc::new(Serialized::UtfString(text));
        self.cache(handle, &value);
        Ok(value)
    }

    /// Length-prefixed (u16) modified-UTF-8 string, the `DataInput`
    /// `readUTF` shape used for class names, field names, and regular
    /// strings.
    fn read_utf(&mut self) -> Result<String, DecodeError> {
        let len = self.cursor.u16()?;
        self.read_utf_bytes(usize::from(len))
    }

    fn read_utf_bytes(&mut self, len: usize) -> Result<String, DecodeError> {
        let offset = self.cursor.position();
        let bytes = self.cursor.take(len)?;
        Ok(mutf8::decode(bytes, offset)?)
    }

    // ── Null, references, block data ──────────────────────────────────

    fn read_null(&mut self) -> Result<Option<Rc<Serialized>>, DecodeError> {
        self.expect_tag(Tag::Null)?;
        Ok(None)
    }

    fn read_reference(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::Reference)?;
        let handle = self.cursor.u32()?;
        self.handles
            .get(&handle)
            .cloned()
            .ok_or(DecodeError::UnresolvedHandle { handle })
    }

    fn read_block_data(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::BlockData)?;
        let len = usize::from(self.cursor.u8()?);
        let bytes = self.cursor.take(len)?.to_vec();
        // Block data is never handle-cached.
        Ok(Rc::new(Serialized::BlockData(bytes)))
    }

    fn read_long_block_data(&mut self) -> Result<Rc<Serialized>, DecodeError> {
        self.expect_tag(Tag::BlockDataLong)?;

        let len_offset = self.cursor.position();
        let len = self.cursor.i32()?;
        if len < 0 {
            return Err(DecodeError::NegativeLength {
                length: i64::from(len),
                offset: len_offset,
            });
        }
        let bytes = self.cursor.take(len as usize)?.to_vec();
        Ok(Rc::new(Serialized::BlockData(bytes)))
    }

    // ── Tag assertions ────────────────────────────────────────────────

    /// Consume one byte and assert it is the given tag. Dispatch
    /// already peeked it in the normal flow, so a mismatch here means a
    /// corrupt stream.
    fn expect_tag(&mut self, tag: Tag) -> Result<(), DecodeError> {
        let offset = self.cursor.position();
        let found = self.cursor.u8()?;
        if found == tag.byte() {
            Ok(())
        } else {
            Err(DecodeError::TagMismatch {
                expected: tag.name(),
                found,
                offset,
            })
        }
    }
}

/// The component type code of an array class.
///
/// Array class names carry a leading `[` marker; the component code is
/// the character after it (`"[I"` → int, `"[[I"` → array, `"[Lpkg.T;"`
/// → object).
fn component_type_code(class_name: &str, offset: usize) -> Result<TypeCode, DecodeError> {
    let bytes = class_name.as_bytes();
    if bytes.first() != Some(&b'[') {
        return Err(DecodeError::StructuralMismatch {
            expected: "array class name starting with '['",
            offset,
        });
    }
    let code = *bytes.get(1).ok_or(DecodeError::StructuralMismatch {
        expected: "array class name with a component marker",
        offset,
    })?;
    TypeCode::from_byte(code).ok_or(DecodeError::InvalidTypeCode { code, offset })
}

impl Iterator for StreamReader<'_> {
    type Item = Result<Option<Rc<Serialized>>, DecodeError>;

    /// Yield the next top-level content element, or `None` once the
    /// buffer is exhausted. After an error the iterator fuses.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.cursor.has_remaining() {
            return None;
        }

        let item = self.read_content_element();
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(content: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0xAC, 0xED, 0x00, 0x05];
        bytes.extend_from_slice(content);
        bytes
    }

    #[test]
    fn null_element_decodes_to_none() {
        let bytes = stream(&[0x70]);
        let values = StreamReader::new(&bytes).unwrap().read_all().unwrap();
        assert_eq!(values, vec![None]);
    }

    #[test]
    fn bad_magic_fails_before_any_handle() {
        let err = StreamReader::new(&[0xDE, 0xAD, 0x00, 0x05]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHeader(_)));
    }

    #[test]
    fn block_data_is_not_handle_cached() {
        let bytes = stream(&[0x77, 0x03, 0xAA, 0xBB, 0xCC]);
        let mut reader = StreamReader::new(&bytes).unwrap();
        let value = reader.next().unwrap().unwrap().unwrap();
        assert_eq!(*value, Serialized::BlockData(vec![0xAA, 0xBB, 0xCC]));
        assert_eq!(reader.handle_count(), 0);
    }

    #[test]
    fn string_is_cached_and_reference_shares_it() {
        // TC_STRING "hi", then TC_REFERENCE to handle 0x7E0000.
        let mut content = vec![0x74, 0x00, 0x02, b'h', b'i'];
        content.extend_from_slice(&[0x71, 0x00, 0x7E, 0x00, 0x00]);
        let bytes = stream(&content);

        let mut reader = StreamReader::new(&bytes).unwrap();
        let first = reader.next().unwrap().unwrap().unwrap();
        let second = reader.next().unwrap().unwrap().unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.as_string(), Some("hi"));
    }

    #[test]
    fn unknown_handle_is_fatal() {
        let bytes = stream(&[0x71, 0x00, 0x7E, 0x00, 0x09]);
        let err = StreamReader::new(&bytes).unwrap().read_all().unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnresolvedHandle { handle: 0x7E_0009 }
        ));
    }

    #[test]
    fn unexpected_tag_reports_offset_and_byte() {
        let bytes = stream(&[0x20]);
        let err = StreamReader::new(&bytes).unwrap().read_all().unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedTag { byte: 0x20, offset: 4 }
        ));
    }

    #[test]
    fn iterator_fuses_after_error() {
        let bytes = stream(&[0x20, 0x70]);
        let mut reader = StreamReader::new(&bytes).unwrap();
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn component_code_skips_array_marker() {
        assert_eq!(component_type_code("[I", 0).unwrap(), TypeCode::Int);
        assert_eq!(component_type_code("[[I", 0).unwrap(), TypeCode::Array);
        assert_eq!(
            component_type_code("[Ljava.lang.Object;", 0).unwrap(),
            TypeCode::Object
        );
        assert!(component_type_code("I", 0).is_err());
        assert!(component_type_code("[", 0).is_err());
    }
}
