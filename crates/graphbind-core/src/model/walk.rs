//! Generic table-driven traversal shared by every model.

use crate::{
    error::{DecodeError, EncodeError},
    obs::sink::{self, CodecEvent},
    serialize::{CodecContext, ParseNode, SerializationWriter},
    traits::Model,
};

/// Populate `model` from an object node.
///
/// Recognized keys go through their table entry; the rest are kept as
/// additional data when preservation is enabled, subject to the same
/// `max_depth` as modelled fields. Any reader failure aborts with the
/// offending wire path attached.
pub fn deserialize_fields<M: Model>(
    model: &mut M,
    node: &dyn ParseNode,
    cx: &mut CodecContext<'_>,
) -> Result<(), DecodeError> {
    let entries = node
        .object_entries()
        .ok_or_else(|| DecodeError::type_mismatch("Object", node.tag()))?;
    let table = M::field_table();
    let preserve = cx.config().preserve_additional_data;
    let mut fields_read = 0u64;

    for (key, child) in entries {
        if let Some(field) = table.get(key) {
            field.read(model, child, cx).map_err(|e| e.at(key))?;
            fields_read += 1;
        } else {
            sink::record(CodecEvent::UnknownField {
                type_name: M::TYPE_NAME,
                field: key,
                preserved: preserve,
            });
            if preserve {
                let value = child.to_value();
                cx.admit(value.nesting())
                    .map_err(|e: DecodeError| e.at(key))?;
                model
                    .entity_mut()
                    .additional_data_mut()
                    .insert(key.to_string(), value);
            }
        }
    }

    sink::record(CodecEvent::ModelDecoded {
        type_name: M::TYPE_NAME,
        fields: fields_read,
    });

    Ok(())
}

/// Write every present field of `model` into the currently open object,
/// followed by its additional data.
pub fn serialize_fields<M: Model>(
    model: &M,
    writer: &mut dyn SerializationWriter,
    cx: &mut CodecContext<'_>,
) -> Result<(), EncodeError> {
    let table = M::field_table();

    for field in table.iter() {
        field
            .write(model, writer, cx)
            .map_err(|e| e.at(field.name()))?;
    }

    // declared fields win over additional data under the same key
    for (key, value) in model.entity().additional_data() {
        if table.contains(key) {
            continue;
        }
        cx.admit(value.nesting())
            .and_then(|()| writer.write_value(Some(key), value))
            .map_err(|e: EncodeError| e.at(key))?;
    }

    sink::record(CodecEvent::ModelEncoded {
        type_name: M::TYPE_NAME,
    });

    Ok(())
}

/// Decode a whole object node into a fresh `M::new()` instance.
pub fn decode_model<M: Model>(
    node: &dyn ParseNode,
    cx: &mut CodecContext<'_>,
) -> Result<Option<M>, DecodeError> {
    if node.is_null() {
        return Ok(None);
    }

    cx.nested(|cx| {
        let mut model = M::new();
        deserialize_fields(&mut model, node, cx)?;

        Ok(Some(model))
    })
}

/// Encode `model` as one object under `key`.
pub fn encode_model<M: Model>(
    model: &M,
    key: Option<&str>,
    writer: &mut dyn SerializationWriter,
    cx: &mut CodecContext<'_>,
) -> Result<(), EncodeError> {
    cx.nested(|cx| {
        writer.start_object(key)?;
        serialize_fields(model, writer, cx)?;
        writer.end_object()
    })
}
