use crate::{
    codec::FieldCodec,
    error::{DecodeError, EncodeError},
    model::FieldKind,
    serialize::{CodecContext, ParseNode, SerializationWriter},
    types::{Blob, Date, IsoDuration, TimeOfDay, Timestamp, Uuid},
    value::{Value, ValueTag},
};

// Null-aware scalar readers shared by the primitive codecs.

fn read_str<'a>(
    node: &'a dyn ParseNode,
    expected: &'static str,
) -> Result<Option<&'a str>, DecodeError> {
    if node.is_null() {
        return Ok(None);
    }

    node.as_str()
        .map(Some)
        .ok_or_else(|| DecodeError::type_mismatch(expected, node.tag()))
}

fn read_integer(node: &dyn ParseNode, expected: &'static str) -> Result<Option<i64>, DecodeError> {
    if node.is_null() {
        return Ok(None);
    }
    if let Some(n) = node.as_i64() {
        return Ok(Some(n));
    }

    match node.tag() {
        ValueTag::Uint => Err(DecodeError::invalid_scalar(
            expected,
            scalar_text(node),
            "out of range",
        )),
        ValueTag::Float => Err(DecodeError::invalid_scalar(
            expected,
            scalar_text(node),
            "not an integer",
        )),
        tag => Err(DecodeError::type_mismatch(expected, tag)),
    }
}

fn scalar_text(node: &dyn ParseNode) -> String {
    serde_json::to_string(&node.to_value()).unwrap_or_default()
}

///
/// String / bool / numbers
///

impl FieldCodec for String {
    fn kind() -> FieldKind {
        FieldKind::Text
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        Ok(read_str(node, Self::kind().label())?.map(str::to_string))
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_str(key, self)
    }
}

impl FieldCodec for bool {
    fn kind() -> FieldKind {
        FieldKind::Bool
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        if node.is_null() {
            return Ok(None);
        }

        node.as_bool()
            .map(Some)
            .ok_or_else(|| DecodeError::type_mismatch(Self::kind().label(), node.tag()))
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_bool(key, *self)
    }
}

impl FieldCodec for i32 {
    fn kind() -> FieldKind {
        FieldKind::Int32
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        let label = Self::kind().label();

        read_integer(node, label)?
            .map(|n| {
                Self::try_from(n).map_err(|_| DecodeError::invalid_scalar(label, n.to_string(), "out of range"))
            })
            .transpose()
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_i64(key, i64::from(*self))
    }
}

impl FieldCodec for i64 {
    fn kind() -> FieldKind {
        FieldKind::Int64
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        read_integer(node, Self::kind().label())
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_i64(key, *self)
    }
}

impl FieldCodec for f64 {
    fn kind() -> FieldKind {
        FieldKind::Float64
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        if node.is_null() {
            return Ok(None);
        }

        node.as_f64()
            .map(Some)
            .ok_or_else(|| DecodeError::type_mismatch(Self::kind().label(), node.tag()))
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_f64(key, *self)
    }
}

///
/// Untyped
///

impl FieldCodec for Value {
    fn kind() -> FieldKind {
        FieldKind::Untyped
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        if node.is_null() {
            return Ok(None);
        }

        Ok(Some(node.to_value()))
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_value(key, self)
    }
}

///
/// Text-encoded scalars
///
/// Each type travels as a string and is parsed with its `FromStr` impl.
///

macro_rules! impl_text_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldCodec for $ty {
                fn kind() -> FieldKind {
                    FieldKind::$kind
                }

                fn decode(
                    node: &dyn ParseNode,
                    _: &mut CodecContext<'_>,
                ) -> Result<Option<Self>, DecodeError> {
                    let label = Self::kind().label();

                    read_str(node, label)?
                        .map(|text| {
                            text.parse::<$ty>()
                                .map_err(|e| DecodeError::invalid_scalar(label, text, e))
                        })
                        .transpose()
                }

                fn encode(
                    &self,
                    key: Option<&str>,
                    writer: &mut dyn SerializationWriter,
                    _: &mut CodecContext<'_>,
                ) -> Result<(), EncodeError> {
                    writer.write_str(key, &self.to_string())
                }
            }
        )*
    };
}

impl_text_scalar! {
    Date => Date,
    IsoDuration => Duration,
    TimeOfDay => TimeOfDay,
    Uuid => Uuid,
}

impl FieldCodec for Timestamp {
    fn kind() -> FieldKind {
        FieldKind::Timestamp
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        let label = Self::kind().label();

        read_str(node, label)?
            .map(|text| Self::parse_rfc3339(text).map_err(|e| DecodeError::invalid_scalar(label, text, e)))
            .transpose()
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        if !self.is_representable() {
            return Err(EncodeError::OutOfRange {
                kind: Self::kind().label(),
                value: self.to_string(),
            });
        }

        writer.write_str(key, &self.to_string())
    }
}

impl FieldCodec for Blob {
    fn kind() -> FieldKind {
        FieldKind::Blob
    }

    fn decode(node: &dyn ParseNode, _: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        let label = Self::kind().label();

        read_str(node, label)?
            .map(|text| Self::from_base64(text).map_err(|e| DecodeError::invalid_scalar(label, text, e)))
            .transpose()
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        _: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        writer.write_str(key, &self.to_base64())
    }
}
