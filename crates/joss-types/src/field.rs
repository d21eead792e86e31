use joss_wire::TypeCode;

/// A field descriptor from a local class descriptor.
///
/// Descriptors describe layout, not data: the decoder walks them in
/// declaration order to know how many bytes (or which recursive decode
/// path) each field value takes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field {
    /// A fixed-width scalar field (`Z B S C I J F D`).
    Primitive { name: String, type_code: TypeCode },

    /// An object-reference field; `type_name` is the declared type in
    /// descriptor form (e.g. `"Ljava/lang/String;"`).
    Object { name: String, type_name: String },

    /// An array field; `component_type` is the declared array type in
    /// descriptor form (e.g. `"[I"`).
    Array { name: String, component_type: String },
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive { name, .. } | Self::Object { name, .. } | Self::Array { name, .. } => {
                name
            }
        }
    }

    /// The type code driving this field's value decode.
    ///
    /// Object and array fields have fixed codes (`L` and `[`); only
    /// primitive fields vary.
    pub fn type_code(&self) -> TypeCode {
        match self {
            Self::Primitive { type_code, .. } => *type_code,
            Self::Object { .. } => TypeCode::Object,
            Self::Array { .. } => TypeCode::Array,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_and_array_codes_are_fixed() {
        let object = Field::Object {
            name: "next".into(),
            type_name: "LList;".into(),
        };
        assert_eq!(object.type_code(), TypeCode::Object);

        let array = Field::Array {
            name: "values".into(),
            component_type: "[I".into(),
        };
        assert_eq!(array.type_code(), TypeCode::Array);
    }

    #[test]
    fn name_is_uniform_across_variants() {
        let field = Field::Primitive {
            name: "value".into(),
            type_code: TypeCode::Int,
        };
        assert_eq!(field.name(), "value");
    }
}
