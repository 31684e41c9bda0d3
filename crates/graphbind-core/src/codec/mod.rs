mod enums;
mod primitive;

#[cfg(test)]
mod tests;

use crate::{
    error::{DecodeError, EncodeError},
    model::FieldKind,
    serialize::{CodecContext, ParseNode, SerializationWriter},
};

pub use enums::{EnumValue, UnknownToken, decode_enum, encode_enum};

///
/// FieldCodec
///
/// Reads one typed value from a parse node and writes it back.
///
/// `decode` returns `Ok(None)` for `null` (and for enum tokens it does not
/// recognize), which field readers treat as "leave unset".
///

pub trait FieldCodec: Sized {
    fn kind() -> FieldKind;

    fn decode(node: &dyn ParseNode, cx: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError>;

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        cx: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError>;
}

/// Decode a collection node element by element.
///
/// `null` elements and unrecognized enum tokens are dropped; the rest keep
/// document order. Element errors carry their index.
pub fn decode_collection<V: FieldCodec>(
    node: &dyn ParseNode,
    cx: &mut CodecContext<'_>,
) -> Result<Option<Vec<V>>, DecodeError> {
    if node.is_null() {
        return Ok(None);
    }

    let items = node
        .collection_nodes()
        .ok_or_else(|| DecodeError::type_mismatch("List", node.tag()))?;

    let mut out = Vec::new();
    for (i, item) in items.enumerate() {
        if let Some(value) = V::decode(item, cx).map_err(|e| e.at_index(i))? {
            out.push(value);
        }
    }

    Ok(Some(out))
}

/// Write every element of `items` as one collection under `key`.
pub fn encode_collection<V: FieldCodec>(
    items: &[V],
    key: Option<&str>,
    writer: &mut dyn SerializationWriter,
    cx: &mut CodecContext<'_>,
) -> Result<(), EncodeError> {
    writer.start_collection(key)?;
    for (i, item) in items.iter().enumerate() {
        item.encode(None, writer, cx).map_err(|e| e.at_index(i))?;
    }

    writer.end_collection()
}
