/// Errors raised while constructing decoded values.
///
/// These are semantic, not framing, failures: the bytes were readable
/// but describe a value the data model refuses to represent. They are
/// raised at construction time, before the offending value is cached
/// or used.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The `SC_*` flag byte of a local class descriptor is internally
    /// inconsistent.
    ///
    /// A class must be exactly one of serializable or externalizable;
    /// a serializable class must not carry `SC_BLOCK_DATA`, and an
    /// externalizable class must not carry `SC_WRITE_METHOD`.
    #[error("inconsistent class descriptor flags {flags:#04X}: {reason}")]
    InvalidClassFlags { flags: u8, reason: &'static str },
}
