use crate::{
    codec::FieldCodec,
    config::CodecConfig,
    error::{DecodeError, EncodeError},
    serialize::{ValueWriter, deserialize, serialize},
    value::Value,
};

/// Decode JSON bytes with the default configuration.
pub fn from_slice<T: FieldCodec>(bytes: &[u8]) -> Result<T, DecodeError> {
    from_slice_with(bytes, &CodecConfig::default())
}

/// Decode JSON bytes.
///
/// Input size is bounded by `max_document_bytes` before any parsing.
pub fn from_slice_with<T: FieldCodec>(
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<T, DecodeError> {
    if bytes.len() > config.max_document_bytes {
        return Err(DecodeError::SizeLimitExceeded {
            len: bytes.len(),
            max_bytes: config.max_document_bytes,
        });
    }

    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    deserialize(&document, config)
}

pub fn from_str<T: FieldCodec>(text: &str) -> Result<T, DecodeError> {
    from_slice(text.as_bytes())
}

pub fn from_str_with<T: FieldCodec>(text: &str, config: &CodecConfig) -> Result<T, DecodeError> {
    from_slice_with(text.as_bytes(), config)
}

/// Encode into an untyped tree.
pub fn to_value<T: FieldCodec>(value: &T, config: &CodecConfig) -> Result<Value, EncodeError> {
    let mut writer = ValueWriter::new();
    serialize(value, &mut writer, config)?;

    writer.into_value()
}

/// Encode JSON bytes with the default configuration.
pub fn to_vec<T: FieldCodec>(value: &T) -> Result<Vec<u8>, EncodeError> {
    to_vec_with(value, &CodecConfig::default())
}

pub fn to_vec_with<T: FieldCodec>(value: &T, config: &CodecConfig) -> Result<Vec<u8>, EncodeError> {
    let tree = to_value(value, config)?;

    serde_json::to_vec(&tree).map_err(|e| EncodeError::Json(e.to_string()))
}

pub fn to_string<T: FieldCodec>(value: &T) -> Result<String, EncodeError> {
    to_string_with(value, &CodecConfig::default())
}

pub fn to_string_with<T: FieldCodec>(
    value: &T,
    config: &CodecConfig,
) -> Result<String, EncodeError> {
    let tree = to_value(value, config)?;

    serde_json::to_string(&tree).map_err(|e| EncodeError::Json(e.to_string()))
}
