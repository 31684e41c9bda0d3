mod context;
mod node;
mod writer;

pub mod json;

#[cfg(test)]
mod tests;

use crate::{
    codec::FieldCodec,
    config::CodecConfig,
    error::{DecodeError, EncodeError},
    obs::sink::{self, CodecEvent},
    value::{Value, ValueTag},
};

pub use context::CodecContext;
pub use writer::ValueWriter;

/// Structured-document plumbing.
///
/// This module is format-neutral:
/// - `ParseNode` is the read side, `SerializationWriter` the write side.
/// - Model code never sees concrete document types.
/// - Wire-format helpers live in `json`.

///
/// ParseNode
///
/// Read-only view over one node of a structured document.
///

pub trait ParseNode {
    fn tag(&self) -> ValueTag;

    /// Member lookup; `None` for absent keys and for non-object nodes.
    fn child_node(&self, key: &str) -> Option<&dyn ParseNode>;

    /// Members in document order, or `None` if this node is not an object.
    fn object_entries(&self) -> Option<Box<dyn Iterator<Item = (&str, &dyn ParseNode)> + '_>>;

    /// Elements in document order, or `None` if this node is not a collection.
    fn collection_nodes(&self) -> Option<Box<dyn Iterator<Item = &dyn ParseNode> + '_>>;

    fn as_bool(&self) -> Option<bool>;

    fn as_i64(&self) -> Option<i64>;

    fn as_f64(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    /// Detach this node into an owned untyped tree.
    fn to_value(&self) -> Value;

    fn is_null(&self) -> bool {
        self.tag() == ValueTag::Null
    }
}

///
/// SerializationWriter
///
/// Write side of a structured document. `key` is `Some` for object members
/// and `None` for collection elements or the document root.
///

pub trait SerializationWriter {
    fn write_null(&mut self, key: Option<&str>) -> Result<(), EncodeError>;

    fn write_bool(&mut self, key: Option<&str>, value: bool) -> Result<(), EncodeError>;

    fn write_i64(&mut self, key: Option<&str>, value: i64) -> Result<(), EncodeError>;

    fn write_u64(&mut self, key: Option<&str>, value: u64) -> Result<(), EncodeError>;

    fn write_f64(&mut self, key: Option<&str>, value: f64) -> Result<(), EncodeError>;

    fn write_str(&mut self, key: Option<&str>, value: &str) -> Result<(), EncodeError>;

    fn start_object(&mut self, key: Option<&str>) -> Result<(), EncodeError>;

    fn end_object(&mut self) -> Result<(), EncodeError>;

    fn start_collection(&mut self, key: Option<&str>) -> Result<(), EncodeError>;

    fn end_collection(&mut self) -> Result<(), EncodeError>;

    /// Write an untyped tree, recursing through objects and collections.
    fn write_value(&mut self, key: Option<&str>, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Bool(v) => self.write_bool(key, *v),
            Value::Float(v) => self.write_f64(key, *v),
            Value::Int(v) => self.write_i64(key, *v),
            Value::List(items) => {
                self.start_collection(key)?;
                for (i, item) in items.iter().enumerate() {
                    self.write_value(None, item).map_err(|e| e.at_index(i))?;
                }
                self.end_collection()
            }
            Value::Null => self.write_null(key),
            Value::Object(members) => {
                self.start_object(key)?;
                for (member, item) in members {
                    self.write_value(Some(member), item)
                        .map_err(|e| e.at(member))?;
                }
                self.end_object()
            }
            Value::Text(v) => self.write_str(key, v),
            Value::Uint(v) => self.write_u64(key, *v),
        }
    }
}

/// Read a document root into `T`.
///
/// A root that decodes to nothing (JSON `null`) is rejected; optional
/// absence only makes sense for fields.
pub fn deserialize<T: FieldCodec>(
    node: &dyn ParseNode,
    config: &CodecConfig,
) -> Result<T, DecodeError> {
    let mut cx = CodecContext::new(config);
    let result = T::decode(node, &mut cx).and_then(|decoded| {
        decoded.ok_or_else(|| {
            DecodeError::Malformed(format!(
                "document root produced no {} value",
                T::kind().label()
            ))
        })
    });

    if let Err(err) = &result {
        sink::record(CodecEvent::DecodeFailed { kind: err.kind() });
    }

    result
}

/// Write `value` as a document root.
pub fn serialize<T: FieldCodec>(
    value: &T,
    writer: &mut dyn SerializationWriter,
    config: &CodecConfig,
) -> Result<(), EncodeError> {
    let mut cx = CodecContext::new(config);
    let result = value.encode(None, writer, &mut cx);

    if let Err(err) = &result {
        sink::record(CodecEvent::EncodeFailed { kind: err.kind() });
    }

    result
}
