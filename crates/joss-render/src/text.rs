//! Indented plain-text rendering, for terminal inspection.

use std::fmt::Write as _;
use std::rc::Rc;

use joss_types::{ClassDesc, Primitive, Serialized};

const INDENT: &str = "  ";

/// Render a sequence of top-level values, one tree per element.
///
/// Back-references are not marked: a subtree shared through the handle
/// table prints in full at every occurrence. Example output for the
/// canonical linked-list fixture, whose second top-level element is a
/// reference to the nested list:
///
/// ```text
/// object List
///   List:
///     int 17
///     object List
///       List:
///         int 19
///         null
/// object List
///   List:
///     int 19
///     null
/// ```
pub fn render_all(values: &[Option<Rc<Serialized>>]) -> String {
    let mut out = String::new();
    for value in values {
        render_into(&mut out, value.as_deref(), 0);
    }
    out
}

fn render_into(out: &mut String, value: Option<&Serialized>, depth: usize) {
    let pad = INDENT.repeat(depth);

    let Some(value) = value else {
        let _ = writeln!(out, "{pad}null");
        return;
    };

    match value {
        Serialized::Primitive(primitive) => {
            let _ = writeln!(out, "{pad}{} {}", primitive.type_name(), scalar(primitive));
        }

        Serialized::UtfString(text) => {
            let _ = writeln!(out, "{pad}string {text:?}");
        }

        Serialized::Enum {
            class_desc,
            constant_name,
        } => {
            let _ = writeln!(out, "{pad}enum {}.{constant_name}", class_desc.display_name());
        }

        Serialized::Array(elements) => {
            let _ = writeln!(out, "{pad}array ({} elements)", elements.len());
            for element in elements {
                render_into(out, element.as_deref(), depth + 1);
            }
        }

        Serialized::Object(object) => {
            let _ = writeln!(out, "{pad}object {}", object.class_name());
            for (name, values) in &object.class_data {
                let _ = writeln!(out, "{pad}{INDENT}{name}:");
                for value in values {
                    render_into(out, value.as_deref(), depth + 2);
                }
            }
        }

        Serialized::BlockData(bytes) => {
            let _ = writeln!(out, "{pad}blockdata ({} bytes) {}", bytes.len(), hex::encode(bytes));
        }

        Serialized::ClassDesc(desc) => {
            render_class_desc(out, desc, depth);
        }
    }
}

fn render_class_desc(out: &mut String, desc: &ClassDesc, depth: usize) {
    let pad = INDENT.repeat(depth);
    match desc {
        ClassDesc::Local(local) => {
            let _ = writeln!(
                out,
                "{pad}class {} (suid {}, {})",
                local.name,
                local.serial_version_uid,
                if local.flags.externalizable {
                    "externalizable"
                } else {
                    "serializable"
                },
            );
            for field in &local.fields {
                let _ = writeln!(
                    out,
                    "{pad}{INDENT}field {} ({})",
                    field.name(),
                    field.type_code().as_char(),
                );
            }
            if let Some(super_class) = &local.super_class {
                render_class_desc(out, super_class, depth + 1);
            }
        }
        ClassDesc::Proxy(proxy) => {
            let _ = writeln!(out, "{pad}proxy class [{}]", proxy.interface_names.join(", "));
            if let Some(super_class) = &proxy.super_class {
                render_class_desc(out, super_class, depth + 1);
            }
        }
    }
}

fn scalar(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Boolean(v) => v.to_string(),
        Primitive::Byte(v) => v.to_string(),
        Primitive::Short(v) => v.to_string(),
        Primitive::Char(v) => char::from_u32(u32::from(*v))
            .map_or_else(|| format!("{v:#06X}"), |c| format!("{c:?}")),
        Primitive::Int(v) => v.to_string(),
        Primitive::Long(v) => v.to_string(),
        Primitive::Float(v) => v.to_string(),
        Primitive::Double(v) => v.to_string(),
    }
}
