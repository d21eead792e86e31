use joss_wire::TypeCode;

/// One decoded scalar value.
///
/// The variant records which fixed-width read produced the value, so
/// renderers can label it without consulting the field descriptor.
/// `Char` is a raw UTF-16 code unit — the protocol allows lone
/// surrogates there, so it is not a Rust `char`.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Char(u16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Primitive {
    /// The one-letter type code that selects this variant's decode path.
    pub fn type_code(&self) -> TypeCode {
        match self {
            Self::Boolean(_) => TypeCode::Boolean,
            Self::Byte(_) => TypeCode::Byte,
            Self::Short(_) => TypeCode::Short,
            Self::Char(_) => TypeCode::Char,
            Self::Int(_) => TypeCode::Int,
            Self::Long(_) => TypeCode::Long,
            Self::Float(_) => TypeCode::Float,
            Self::Double(_) => TypeCode::Double,
        }
    }

    /// Lowercase type name, for display (`"int"`, `"boolean"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Byte(_) => "byte",
            Self::Short(_) => "short",
            Self::Char(_) => "char",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_match_variants() {
        assert_eq!(Primitive::Int(7).type_code(), TypeCode::Int);
        assert_eq!(Primitive::Boolean(true).type_code(), TypeCode::Boolean);
        assert_eq!(Primitive::Double(0.5).type_code(), TypeCode::Double);
    }

    #[test]
    fn names_are_lowercase_java_spellings() {
        assert_eq!(Primitive::Long(1).type_name(), "long");
        assert_eq!(Primitive::Char(0x41).type_name(), "char");
    }
}
