//! Wire constants for the Java Object Serialization Stream protocol.
//!
//! These values are fixed by the serialization protocol (the `TC_*` and
//! `SC_*` names are the protocol's own). They are collected here so the
//! rest of the workspace never spells a raw tag byte inline.

/// Stream magic: the first Big-Endian u16 of every stream.
pub const STREAM_MAGIC: u16 = 0xACED;

/// Stream version: the second Big-Endian u16 of every stream.
pub const STREAM_VERSION: u16 = 0x0005;

/// Total header size in bytes (magic + version).
pub const HEADER_SIZE: usize = 4;

/// First handle value assigned to a structural stream element.
///
/// Handles count up from here in the order elements *begin* decoding.
pub const BASE_WIRE_HANDLE: u32 = 0x7E_0000;

// ── Tag bytes (TC_*) ──────────────────────────────────────────────────

pub const TC_NULL: u8 = 0x70;
pub const TC_REFERENCE: u8 = 0x71;
pub const TC_CLASSDESC: u8 = 0x72;
pub const TC_OBJECT: u8 = 0x73;
pub const TC_STRING: u8 = 0x74;
pub const TC_ARRAY: u8 = 0x75;
pub const TC_CLASS: u8 = 0x76;
pub const TC_BLOCKDATA: u8 = 0x77;
pub const TC_ENDBLOCKDATA: u8 = 0x78;
pub const TC_RESET: u8 = 0x79;
pub const TC_BLOCKDATALONG: u8 = 0x7A;
pub const TC_EXCEPTION: u8 = 0x7B;
pub const TC_LONGSTRING: u8 = 0x7C;
pub const TC_PROXYCLASSDESC: u8 = 0x7D;
pub const TC_ENUM: u8 = 0x7E;

// ── Class descriptor flag bits (SC_*) ─────────────────────────────────

/// Serializable class declared its own `writeObject` method.
pub const SC_WRITE_METHOD: u8 = 0x01;

/// Class implements `Serializable`.
pub const SC_SERIALIZABLE: u8 = 0x02;

/// Class implements `Externalizable`.
pub const SC_EXTERNALIZABLE: u8 = 0x04;

/// Externalizable class wrote its data in block-data format.
pub const SC_BLOCK_DATA: u8 = 0x08;

/// Class is an enum type.
pub const SC_ENUM: u8 = 0x10;
