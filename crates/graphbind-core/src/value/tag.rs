use crate::value::Value;

///
/// ValueTag
///
/// Variant tag of a structured document node. Labels appear in
/// `DecodeError::TypeMismatch` diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum ValueTag {
    Bool,
    Float,
    Int,
    List,
    Null,
    Object,
    Text,
    Uint,
}

impl ValueTag {
    /// Stable human-readable node kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Null => "Null",
            Self::Object => "Object",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }

    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Float | Self::Int | Self::Uint)
    }
}

#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Bool(_) => ValueTag::Bool,
        Value::Float(_) => ValueTag::Float,
        Value::Int(_) => ValueTag::Int,
        Value::List(_) => ValueTag::List,
        Value::Null => ValueTag::Null,
        Value::Object(_) => ValueTag::Object,
        Value::Text(_) => ValueTag::Text,
        Value::Uint(_) => ValueTag::Uint,
    }
}
