//! JSON rendering of decoded trees.
//!
//! Mirrors the shape the original viewer emitted: every node carries a
//! `$type` discriminator, primitives carry their type name alongside
//! the value, and block data is hex-encoded. Key order is insertion
//! order (`serde_json` with `preserve_order`), so output is stable.

use std::rc::Rc;

use joss_types::{ClassDesc, Field, Primitive, Serialized};
use serde_json::{Map, Value, json};

/// Render a sequence of top-level values as a JSON array.
pub fn render_all(values: &[Option<Rc<Serialized>>]) -> Value {
    Value::Array(values.iter().map(|value| render(value.as_deref())).collect())
}

/// Render one (possibly null) decoded value.
pub fn render(value: Option<&Serialized>) -> Value {
    let Some(value) = value else {
        return Value::Null;
    };

    match value {
        Serialized::Primitive(primitive) => json!({
            "$type": "primitive",
            "type": primitive.type_name(),
            "value": primitive_value(primitive),
        }),

        Serialized::UtfString(text) => json!({
            "$type": "string",
            "value": text,
        }),

        Serialized::Enum {
            class_desc,
            constant_name,
        } => json!({
            "$type": "enum",
            "class": class_desc.display_name(),
            "constant": constant_name,
        }),

        Serialized::Array(elements) => json!({
            "$type": "array",
            "elements": elements
                .iter()
                .map(|element| render(element.as_deref()))
                .collect::<Vec<_>>(),
        }),

        Serialized::Object(object) => {
            let mut data = Map::new();
            for (name, values) in &object.class_data {
                data.insert(
                    name.clone(),
                    Value::Array(values.iter().map(|v| render(v.as_deref())).collect()),
                );
            }
            json!({
                "$type": "object",
                "classes": object
                    .class_descs
                    .iter()
                    .map(|desc| class_desc(desc))
                    .collect::<Vec<_>>(),
                "data": data,
            })
        }

        Serialized::BlockData(bytes) => json!({
            "$type": "blockData",
            "length": bytes.len(),
            "data": hex::encode(bytes),
        }),

        Serialized::ClassDesc(desc) => {
            let mut node = Map::new();
            node.insert("$type".into(), Value::String("classDesc".into()));
            if let Value::Object(body) = class_desc(desc) {
                node.extend(body);
            }
            Value::Object(node)
        }
    }
}

fn class_desc(desc: &ClassDesc) -> Value {
    match desc {
        ClassDesc::Local(local) => json!({
            "kind": "local",
            "name": local.name,
            "serialVersionUid": local.serial_version_uid,
            "flags": {
                "writeMethod": local.flags.write_method,
                "serializable": local.flags.serializable,
                "externalizable": local.flags.externalizable,
                "blockData": local.flags.block_data,
                "enum": local.flags.is_enum,
            },
            "fields": local.fields.iter().map(field).collect::<Vec<_>>(),
            "annotation": local
                .annotation
                .as_ref()
                .map_or(Value::Null, |annotation| {
                    render(Some(&Serialized::Object(annotation.clone())))
                }),
            "super": local
                .super_class
                .as_deref()
                .map_or(Value::Null, class_desc),
        }),

        ClassDesc::Proxy(proxy) => json!({
            "kind": "proxy",
            "interfaces": proxy.interface_names,
            "super": proxy
                .super_class
                .as_deref()
                .map_or(Value::Null, class_desc),
        }),
    }
}

fn field(field: &Field) -> Value {
    match field {
        Field::Primitive { name, type_code } => json!({
            "name": name,
            "type": type_code.as_char().to_string(),
        }),
        Field::Object { name, type_name } => json!({
            "name": name,
            "type": type_name,
        }),
        Field::Array {
            name,
            component_type,
        } => json!({
            "name": name,
            "type": component_type,
        }),
    }
}

/// The JSON value for a scalar.
///
/// Non-finite floats have no JSON number form; they fall back to their
/// Rust display strings. A `char` code unit renders as a one-character
/// string when it is a valid scalar value, otherwise as its number.
fn primitive_value(primitive: &Primitive) -> Value {
    match primitive {
        Primitive::Boolean(value) => Value::Bool(*value),
        Primitive::Byte(value) => json!(value),
        Primitive::Short(value) => json!(value),
        Primitive::Int(value) => json!(value),
        Primitive::Long(value) => json!(value),
        Primitive::Float(value) => float_value(f64::from(*value)),
        Primitive::Double(value) => float_value(*value),
        Primitive::Char(unit) => match char::from_u32(u32::from(*unit)) {
            Some(c) => Value::String(c.to_string()),
            None => json!(unit),
        },
    }
}

fn float_value(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map_or_else(|| Value::String(value.to_string()), Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use joss_decoder::StreamReader;

    #[test]
    fn null_renders_as_json_null() {
        assert_eq!(render(None), Value::Null);
    }

    #[test]
    fn primitive_carries_type_and_value() {
        let rendered = render(Some(&Serialized::Primitive(Primitive::Int(-3))));
        assert_eq!(rendered["$type"], "primitive");
        assert_eq!(rendered["type"], "int");
        assert_eq!(rendered["value"], -3);
    }

    #[test]
    fn non_finite_floats_fall_back_to_strings() {
        let rendered = render(Some(&Serialized::Primitive(Primitive::Double(f64::NAN))));
        assert_eq!(rendered["value"], "NaN");
    }

    #[test]
    fn block_data_is_hex_encoded() {
        let rendered = render(Some(&Serialized::BlockData(vec![0xDE, 0xAD])));
        assert_eq!(rendered["length"], 2);
        assert_eq!(rendered["data"], "dead");
    }

    #[test]
    fn decoded_string_roundtrips_through_render() {
        let bytes = [
            0xAC, 0xED, 0x00, 0x05, 0x74, 0x00, 0x02, b'h', b'i',
        ];
        let values = StreamReader::new(&bytes).unwrap().read_all().unwrap();
        let rendered = render_all(&values);
        assert_eq!(rendered[0]["$type"], "string");
        assert_eq!(rendered[0]["value"], "hi");
    }
}
