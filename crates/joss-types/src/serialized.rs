use std::rc::Rc;

use crate::class_desc::ClassDesc;
use crate::primitive::Primitive;

/// A decoded stream value.
///
/// The whole tree is immutable once constructed. Structural values that
/// were handle-cached during decoding are shared via [`Rc`], so a
/// back-reference in the stream resolves to the *same* allocation as
/// its target — shared substructure stays shared in the output.
#[derive(Clone, Debug, PartialEq)]
pub enum Serialized {
    /// One decoded scalar.
    Primitive(Primitive),

    /// A modified-UTF-8 decoded string.
    UtfString(String),

    /// An enum constant: its class descriptor and constant name.
    Enum {
        class_desc: Rc<ClassDesc>,
        constant_name: String,
    },

    /// An ordered sequence of elements; elements may be null.
    Array(Vec<Option<Rc<Serialized>>>),

    /// A default-serialized object with per-class field data.
    Object(ObjectData),

    /// Raw custom-serialized bytes, opaque to the generic decoder.
    /// Compared and hashed by content.
    BlockData(Vec<u8>),

    /// A class descriptor appearing as a value (top-level `TC_CLASS` /
    /// `TC_CLASSDESC`, or the target of a class-typed reference).
    ClassDesc(Rc<ClassDesc>),
}

impl Serialized {
    /// Borrow the string payload, if this is a `UtfString`.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::UtfString(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the class descriptor, if this value is one.
    pub fn as_class_desc(&self) -> Option<&Rc<ClassDesc>> {
        match self {
            Self::ClassDesc(desc) => Some(desc),
            _ => None,
        }
    }
}

/// Field data for one object, split by class level.
///
/// `class_descs` lists the resolved descriptors root-first (the order
/// the protocol serializes field data in). `class_data` pairs each
/// level's name — class name for local levels, first interface name
/// for proxy levels — with that level's decoded field values, in the
/// same root-first order. Proxy levels contribute an empty value list.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectData {
    pub class_descs: Vec<Rc<ClassDesc>>,
    pub class_data: Vec<(String, Vec<Option<Rc<Serialized>>>)>,
}

impl ObjectData {
    /// Most-derived class name (last descriptor in root-first order),
    /// or the empty string for a synthetic annotation object with no
    /// descriptors.
    pub fn class_name(&self) -> &str {
        self.class_descs.last().map_or("", |desc| desc.display_name())
    }

    /// Field values recorded for a given class level.
    pub fn values_for(&self, class_name: &str) -> Option<&[Option<Rc<Serialized>>]> {
        self.class_data
            .iter()
            .find(|(name, _)| name == class_name)
            .map(|(_, values)| values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_data_compares_by_content() {
        let a = Serialized::BlockData(vec![1, 2, 3]);
        let b = Serialized::BlockData(vec![1, 2, 3]);
        let c = Serialized::BlockData(vec![1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn as_string_only_matches_strings() {
        assert_eq!(Serialized::UtfString("hi".into()).as_string(), Some("hi"));
        assert_eq!(Serialized::BlockData(vec![]).as_string(), None);
    }

    #[test]
    fn values_for_looks_up_by_level_name() {
        let object = ObjectData {
            class_descs: vec![],
            class_data: vec![
                ("Base".into(), vec![None]),
                ("Derived".into(), vec![]),
            ],
        };
        assert_eq!(object.values_for("Base").map(<[_]>::len), Some(1));
        assert_eq!(object.values_for("Derived").map(<[_]>::len), Some(0));
        assert!(object.values_for("Missing").is_none());
    }
}
