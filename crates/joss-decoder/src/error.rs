use joss_types::TypeError;
use joss_wire::WireError;

/// Errors that abort a stream decode.
///
/// The protocol has no forward error recovery: every variant here is
/// fatal to the decode call that raised it. Callers catch the failure
/// at the top level and fall back to a byte-oriented rendering.
///
/// ```text
///   DecodeError
///   ├── InvalidHeader(WireError)  ← wrong magic or version, raised first
///   ├── UnexpectedTag             ← peeked byte matches no dispatch case
///   ├── TagMismatch               ← consumed byte differs from expected tag
///   ├── UnresolvedHandle          ← TC_REFERENCE to an unknown handle
///   ├── NullClassDesc             ← object or enum with a null descriptor
///   ├── StructuralMismatch        ← e.g. array descriptor is a proxy
///   ├── InvalidTypeCode           ← field/component code not Z B S C I J F D L [
///   ├── NegativeLength            ← signed length field below zero
///   ├── NestingTooDeep            ← structural recursion past the depth cap
///   ├── Type(TypeError)           ← class descriptor flag invariant
///   └── Wire(WireError)           ← truncation, malformed modified UTF-8
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The 4-byte stream header failed validation. Raised before any
    /// content decoding begins and before any handle is allocated.
    #[error("invalid header: {0}")]
    InvalidHeader(WireError),

    /// A peeked tag byte matched no case in the active dispatch table.
    #[error("unexpected tag byte {byte:#04X} at offset {offset}")]
    UnexpectedTag { byte: u8, offset: usize },

    /// A routine consumed a byte that was not the tag it expected.
    #[error("expected {expected}, got {found:#04X} at offset {offset}")]
    TagMismatch {
        expected: &'static str,
        found: u8,
        offset: usize,
    },

    /// A `TC_REFERENCE` carried a handle with no cached value.
    #[error("unresolved back-reference to handle {handle:#010X}")]
    UnresolvedHandle { handle: u32 },

    /// A null class descriptor where the grammar requires one.
    #[error("null class descriptor at offset {offset}")]
    NullClassDesc { offset: usize },

    /// A value decoded fine but has the wrong shape for its position:
    /// an array descriptor that is a proxy, a string reference that
    /// resolves to a non-string, and the like.
    #[error("expected {expected} at offset {offset}")]
    StructuralMismatch {
        expected: &'static str,
        offset: usize,
    },

    /// A field or array-component type code outside the known set.
    #[error("invalid type code {code:#04X} at offset {offset}")]
    InvalidTypeCode { code: u8, offset: usize },

    /// A signed length field (array size, long string, long block data)
    /// was negative.
    #[error("negative length {length} at offset {offset}")]
    NegativeLength { length: i64, offset: usize },

    /// Structural nesting (objects, arrays, class descriptors) exceeded
    /// the reader's depth cap. The grammar places no bound of its own,
    /// so unbounded recursion on a hostile stream would exhaust the
    /// call stack.
    #[error("nesting deeper than the supported limit at offset {offset}")]
    NestingTooDeep { offset: usize },

    /// A class descriptor flag invariant was violated at construction.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A wire-level failure: truncation or malformed modified UTF-8.
    #[error(transparent)]
    Wire(#[from] WireError),
}
