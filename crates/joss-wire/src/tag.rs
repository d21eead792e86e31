use crate::constants::{
    TC_ARRAY, TC_BLOCKDATA, TC_BLOCKDATALONG, TC_CLASS, TC_CLASSDESC, TC_ENDBLOCKDATA, TC_ENUM,
    TC_EXCEPTION, TC_LONGSTRING, TC_NULL, TC_OBJECT, TC_PROXYCLASSDESC, TC_REFERENCE, TC_RESET,
    TC_STRING,
};

/// A content tag byte (`0x70..=0x7E`).
///
/// Every content element in the stream starts with one of these. The
/// decoder peeks a tag at each element boundary and dispatches on it;
/// a byte outside this range is an immediate decode error.
///
/// ```text
/// ┌──────┬─────────────────┬──────┬──────────────────┐
/// │ Byte │ Tag             │ Byte │ Tag              │
/// ├──────┼─────────────────┼──────┼──────────────────┤
/// │ 0x70 │ Null            │ 0x78 │ EndBlockData     │
/// │ 0x71 │ Reference       │ 0x79 │ Reset            │
/// │ 0x72 │ ClassDesc       │ 0x7A │ BlockDataLong    │
/// │ 0x73 │ Object          │ 0x7B │ Exception        │
/// │ 0x74 │ String          │ 0x7C │ LongString       │
/// │ 0x75 │ Array           │ 0x7D │ ProxyClassDesc   │
/// │ 0x76 │ Class           │ 0x7E │ Enum             │
/// │ 0x77 │ BlockData       │      │                  │
/// └──────┴─────────────────┴──────┴──────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Null,
    Reference,
    ClassDesc,
    Object,
    String,
    Array,
    Class,
    BlockData,
    EndBlockData,
    Reset,
    BlockDataLong,
    Exception,
    LongString,
    ProxyClassDesc,
    Enum,
}

impl Tag {
    /// Decode a raw byte into a tag, or `None` for bytes outside the
    /// tag range.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            TC_NULL => Some(Self::Null),
            TC_REFERENCE => Some(Self::Reference),
            TC_CLASSDESC => Some(Self::ClassDesc),
            TC_OBJECT => Some(Self::Object),
            TC_STRING => Some(Self::String),
            TC_ARRAY => Some(Self::Array),
            TC_CLASS => Some(Self::Class),
            TC_BLOCKDATA => Some(Self::BlockData),
            TC_ENDBLOCKDATA => Some(Self::EndBlockData),
            TC_RESET => Some(Self::Reset),
            TC_BLOCKDATALONG => Some(Self::BlockDataLong),
            TC_EXCEPTION => Some(Self::Exception),
            TC_LONGSTRING => Some(Self::LongString),
            TC_PROXYCLASSDESC => Some(Self::ProxyClassDesc),
            TC_ENUM => Some(Self::Enum),
            _ => None,
        }
    }

    /// The wire byte for this tag.
    pub fn byte(self) -> u8 {
        match self {
            Self::Null => TC_NULL,
            Self::Reference => TC_REFERENCE,
            Self::ClassDesc => TC_CLASSDESC,
            Self::Object => TC_OBJECT,
            Self::String => TC_STRING,
            Self::Array => TC_ARRAY,
            Self::Class => TC_CLASS,
            Self::BlockData => TC_BLOCKDATA,
            Self::EndBlockData => TC_ENDBLOCKDATA,
            Self::Reset => TC_RESET,
            Self::BlockDataLong => TC_BLOCKDATALONG,
            Self::Exception => TC_EXCEPTION,
            Self::LongString => TC_LONGSTRING,
            Self::ProxyClassDesc => TC_PROXYCLASSDESC,
            Self::Enum => TC_ENUM,
        }
    }

    /// The protocol's own name for this tag, for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "TC_NULL",
            Self::Reference => "TC_REFERENCE",
            Self::ClassDesc => "TC_CLASSDESC",
            Self::Object => "TC_OBJECT",
            Self::String => "TC_STRING",
            Self::Array => "TC_ARRAY",
            Self::Class => "TC_CLASS",
            Self::BlockData => "TC_BLOCKDATA",
            Self::EndBlockData => "TC_ENDBLOCKDATA",
            Self::Reset => "TC_RESET",
            Self::BlockDataLong => "TC_BLOCKDATALONG",
            Self::Exception => "TC_EXCEPTION",
            Self::LongString => "TC_LONGSTRING",
            Self::ProxyClassDesc => "TC_PROXYCLASSDESC",
            Self::Enum => "TC_ENUM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_byte_roundtrips() {
        for byte in 0x70..=0x7E {
            let tag = Tag::from_byte(byte).expect("byte in tag range");
            assert_eq!(tag.byte(), byte);
        }
    }

    #[test]
    fn bytes_outside_range_are_rejected() {
        assert_eq!(Tag::from_byte(0x6F), None);
        assert_eq!(Tag::from_byte(0x7F), None);
        assert_eq!(Tag::from_byte(0x00), None);
    }

    #[test]
    fn names_match_protocol_spelling() {
        assert_eq!(Tag::Object.name(), "TC_OBJECT");
        assert_eq!(Tag::ProxyClassDesc.name(), "TC_PROXYCLASSDESC");
    }
}
