use std::rc::Rc;

use joss_wire::constants::{SC_BLOCK_DATA, SC_ENUM, SC_EXTERNALIZABLE, SC_SERIALIZABLE, SC_WRITE_METHOD};

use crate::error::TypeError;
use crate::field::Field;
use crate::serialized::ObjectData;

/// Validated `SC_*` flag set of a local class descriptor.
///
/// The four serialization flags are mutually constrained; an
/// inconsistent combination is rejected here, before any field
/// descriptor is read, so a bad flag byte can never produce a cached
/// descriptor.
///
/// ```text
/// ┌──────┬──────────────────┬──────────────────────────────────────┐
/// │ Bit  │ Flag             │ Constraint                           │
/// ├──────┼──────────────────┼──────────────────────────────────────┤
/// │ 0x01 │ SC_WRITE_METHOD  │ serializable only                    │
/// │ 0x02 │ SC_SERIALIZABLE  │ exactly one of these two must be set │
/// │ 0x04 │ SC_EXTERNALIZABLE│                                      │
/// │ 0x08 │ SC_BLOCK_DATA    │ externalizable only                  │
/// │ 0x10 │ SC_ENUM          │ informational                        │
/// └──────┴──────────────────┴──────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassFlags {
    pub write_method: bool,
    pub serializable: bool,
    pub externalizable: bool,
    pub block_data: bool,
    pub is_enum: bool,
}

impl ClassFlags {
    /// Validate a raw flag byte.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidClassFlags`] when the combination
    /// violates the serializable/externalizable constraints.
    pub fn from_byte(flags: u8) -> Result<Self, TypeError> {
        let parsed = Self {
            write_method: flags & SC_WRITE_METHOD != 0,
            serializable: flags & SC_SERIALIZABLE != 0,
            externalizable: flags & SC_EXTERNALIZABLE != 0,
            block_data: flags & SC_BLOCK_DATA != 0,
            is_enum: flags & SC_ENUM != 0,
        };

        if parsed.serializable && parsed.externalizable {
            return Err(TypeError::InvalidClassFlags {
                flags,
                reason: "cannot be both serializable and externalizable",
            });
        }
        if !parsed.serializable && !parsed.externalizable {
            return Err(TypeError::InvalidClassFlags {
                flags,
                reason: "must be either serializable or externalizable",
            });
        }
        if parsed.serializable && parsed.block_data {
            return Err(TypeError::InvalidClassFlags {
                flags,
                reason: "serializable class cannot carry SC_BLOCK_DATA",
            });
        }
        if parsed.externalizable && parsed.write_method {
            return Err(TypeError::InvalidClassFlags {
                flags,
                reason: "externalizable class cannot carry SC_WRITE_METHOD",
            });
        }

        Ok(parsed)
    }

    /// True when object decoding must consume a trailing block-data
    /// region terminated by `TC_ENDBLOCKDATA` at this class level.
    pub fn has_object_annotation(self) -> bool {
        self.serializable && self.write_method || self.externalizable && self.block_data
    }
}

/// A concretely compiled class, as self-described in the stream.
///
/// `super_class` links descriptors into an ancestor chain; object data
/// is decoded level by level from the root of that chain down.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalClassDesc {
    pub name: String,
    pub serial_version_uid: i64,
    pub flags: ClassFlags,
    pub fields: Vec<Field>,
    /// Synthetic object holding the class-annotation elements, keyed by
    /// this descriptor's own name. `None` when the annotation block was
    /// empty.
    pub annotation: Option<ObjectData>,
    pub super_class: Option<Rc<ClassDesc>>,
}

/// A runtime-generated dynamic proxy class: a set of interface names
/// with no field table of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyClassDesc {
    pub interface_names: Vec<String>,
    pub super_class: Option<Rc<ClassDesc>>,
}

/// A class descriptor — either a concrete (local) class or a dynamic
/// proxy.
#[derive(Clone, Debug, PartialEq)]
pub enum ClassDesc {
    Local(LocalClassDesc),
    Proxy(ProxyClassDesc),
}

impl ClassDesc {
    pub fn super_class(&self) -> Option<&Rc<ClassDesc>> {
        match self {
            Self::Local(local) => local.super_class.as_ref(),
            Self::Proxy(proxy) => proxy.super_class.as_ref(),
        }
    }

    /// Display name: the class name for local descriptors, the first
    /// interface name for proxies.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Local(local) => &local.name,
            Self::Proxy(proxy) => proxy.interface_names.first().map_or("", String::as_str),
        }
    }

}

/// The ancestor chain of a descriptor, starting with itself and ending
/// at the root of its superclass chain.
pub fn ancestry(desc: &Rc<ClassDesc>) -> Vec<Rc<ClassDesc>> {
    let mut chain = vec![Rc::clone(desc)];
    let mut current = Rc::clone(desc);
    while let Some(parent) = current.super_class().cloned() {
        chain.push(Rc::clone(&parent));
        current = parent;
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializable_with_write_method_is_valid() {
        let flags = ClassFlags::from_byte(SC_SERIALIZABLE | SC_WRITE_METHOD).unwrap();
        assert!(flags.serializable);
        assert!(flags.has_object_annotation());
    }

    #[test]
    fn externalizable_with_block_data_is_valid() {
        let flags = ClassFlags::from_byte(SC_EXTERNALIZABLE | SC_BLOCK_DATA).unwrap();
        assert!(flags.externalizable);
        assert!(flags.has_object_annotation());
    }

    #[test]
    fn plain_serializable_has_no_object_annotation() {
        let flags = ClassFlags::from_byte(SC_SERIALIZABLE).unwrap();
        assert!(!flags.has_object_annotation());
    }

    #[test]
    fn reject_both_serializable_and_externalizable() {
        let err = ClassFlags::from_byte(SC_SERIALIZABLE | SC_EXTERNALIZABLE).unwrap_err();
        assert!(matches!(err, TypeError::InvalidClassFlags { flags: 0x06, .. }));
    }

    #[test]
    fn reject_neither_serializable_nor_externalizable() {
        assert!(ClassFlags::from_byte(0x00).is_err());
        assert!(ClassFlags::from_byte(SC_WRITE_METHOD).is_err());
    }

    #[test]
    fn reject_serializable_with_block_data() {
        assert!(ClassFlags::from_byte(SC_SERIALIZABLE | SC_BLOCK_DATA).is_err());
    }

    #[test]
    fn reject_externalizable_with_write_method() {
        assert!(ClassFlags::from_byte(SC_EXTERNALIZABLE | SC_WRITE_METHOD).is_err());
    }

    #[test]
    fn ancestry_walks_root_last() {
        let root = Rc::new(ClassDesc::Local(LocalClassDesc {
            name: "Base".into(),
            serial_version_uid: 1,
            flags: ClassFlags::from_byte(SC_SERIALIZABLE).unwrap(),
            fields: vec![],
            annotation: None,
            super_class: None,
        }));
        let derived = Rc::new(ClassDesc::Local(LocalClassDesc {
            name: "Derived".into(),
            serial_version_uid: 2,
            flags: ClassFlags::from_byte(SC_SERIALIZABLE).unwrap(),
            fields: vec![],
            annotation: None,
            super_class: Some(Rc::clone(&root)),
        }));

        let chain = ancestry(&derived);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].display_name(), "Derived");
        assert_eq!(chain[1].display_name(), "Base");
    }
}
