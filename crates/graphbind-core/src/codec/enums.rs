use crate::{
    error::{DecodeError, EncodeError},
    obs::sink::{self, CodecEvent},
    serialize::{CodecContext, ParseNode, SerializationWriter},
};
use thiserror::Error as ThisError;

///
/// EnumValue
///
/// Closed set of string tokens. Implemented by `graph_enum!`.
///

pub trait EnumValue: Copy + Sized + 'static {
    /// Type label used in diagnostics and metrics.
    const PATH: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Canonical wire token.
    fn as_str(self) -> &'static str;

    /// Exact (case-sensitive) token lookup.
    fn parse(token: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == token)
    }
}

///
/// UnknownToken
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {path} token {token:?}")]
pub struct UnknownToken {
    pub path: &'static str,
    pub token: String,
}

impl UnknownToken {
    #[must_use]
    pub fn new(path: &'static str, token: &str) -> Self {
        Self {
            path,
            token: token.to_string(),
        }
    }
}

/// Decode an enum token; unrecognized tokens decode to `None` and are
/// reported to the sink.
pub fn decode_enum<E: EnumValue>(
    node: &dyn ParseNode,
    _cx: &mut CodecContext<'_>,
) -> Result<Option<E>, DecodeError> {
    if node.is_null() {
        return Ok(None);
    }

    let token = node
        .as_str()
        .ok_or_else(|| DecodeError::type_mismatch(E::PATH, node.tag()))?;

    match E::parse(token) {
        Some(value) => Ok(Some(value)),
        None => {
            sink::record(CodecEvent::UnknownEnumToken {
                enum_path: E::PATH,
                token,
            });
            Ok(None)
        }
    }
}

pub fn encode_enum<E: EnumValue>(
    value: E,
    key: Option<&str>,
    writer: &mut dyn SerializationWriter,
) -> Result<(), EncodeError> {
    writer.write_str(key, value.as_str())
}
