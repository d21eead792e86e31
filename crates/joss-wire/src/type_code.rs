/// A one-letter field type code from a class descriptor.
///
/// The eight primitive codes select fixed-width Big-Endian reads; `L`
/// and `[` select recursive object / array decoding.
///
/// ```text
/// ┌──────┬─────────┬───────┐      ┌──────┬────────┐
/// │ Code │ Type    │ Bytes │      │ Code │ Type   │
/// ├──────┼─────────┼───────┤      ├──────┼────────┤
/// │ Z    │ boolean │ 1     │      │ L    │ object │
/// │ B    │ byte    │ 1     │      │ [    │ array  │
/// │ S    │ short   │ 2     │      └──────┴────────┘
/// │ C    │ char    │ 2     │
/// │ I    │ int     │ 4     │
/// │ J    │ long    │ 8     │
/// │ F    │ float   │ 4     │
/// │ D    │ double  │ 8     │
/// └──────┴─────────┴───────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeCode {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    Object,
    Array,
}

impl TypeCode {
    /// Decode an ASCII code byte, or `None` for an unknown code.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'Z' => Some(Self::Boolean),
            b'B' => Some(Self::Byte),
            b'S' => Some(Self::Short),
            b'C' => Some(Self::Char),
            b'I' => Some(Self::Int),
            b'J' => Some(Self::Long),
            b'F' => Some(Self::Float),
            b'D' => Some(Self::Double),
            b'L' => Some(Self::Object),
            b'[' => Some(Self::Array),
            _ => None,
        }
    }

    /// The ASCII letter for this code, as written in field descriptors
    /// and array class names.
    pub fn as_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Char => 'C',
            Self::Int => 'I',
            Self::Long => 'J',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Object => 'L',
            Self::Array => '[',
        }
    }

    /// True for the eight fixed-width scalar codes.
    pub fn is_primitive(self) -> bool {
        !matches!(self, Self::Object | Self::Array)
    }
}
