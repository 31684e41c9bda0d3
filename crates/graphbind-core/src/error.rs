use crate::{config::ConfigError, value::ValueTag};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error unifying configuration, decode and encode failures.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

///
/// DecodeError
///
/// Raised while reading a structured document into a model.
/// `Field` wraps an inner error with the wire path at which it occurred;
/// use [`DecodeError::root`] to reach the underlying cause.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum DecodeError {
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("{path}: {source}")]
    Field {
        path: String,
        #[source]
        source: Box<Self>,
    },

    #[error("invalid {kind} value {value:?}: {reason}")]
    InvalidScalar {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("missing discriminator for {family}")]
    MissingDiscriminator { family: &'static str },

    #[error("document is {len} bytes, exceeding the limit of {max_bytes}")]
    SizeLimitExceeded { len: usize, max_bytes: usize },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unresolved discriminator {tag:?} for {family}")]
    UnresolvedDiscriminator { family: &'static str, tag: String },
}

impl DecodeError {
    pub(crate) const fn type_mismatch(expected: &'static str, found: ValueTag) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.label(),
        }
    }

    pub(crate) fn invalid_scalar(
        kind: &'static str,
        value: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::InvalidScalar {
            kind,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Prefix the error path with a field name.
    #[must_use]
    pub fn at(self, field: &str) -> Self {
        match self {
            Self::Field { path, source } => Self::Field {
                path: join_path(field, &path),
                source,
            },
            other => Self::Field {
                path: field.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Prefix the error path with a collection index.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        self.at(&format!("[{index}]"))
    }

    /// Wire path of the failing value, if the error was raised below the root.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Field { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Underlying cause with path context stripped.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Stable error kind independent of message text.
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        match self.root() {
            Self::DepthLimitExceeded { .. } => DecodeErrorKind::DepthLimitExceeded,
            Self::InvalidScalar { .. } => DecodeErrorKind::InvalidScalar,
            Self::Malformed(_) | Self::Field { .. } => DecodeErrorKind::Malformed,
            Self::MissingDiscriminator { .. } => DecodeErrorKind::MissingDiscriminator,
            Self::SizeLimitExceeded { .. } => DecodeErrorKind::SizeLimitExceeded,
            Self::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
            Self::UnresolvedDiscriminator { .. } => DecodeErrorKind::UnresolvedDiscriminator,
        }
    }
}

///
/// DecodeErrorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DecodeErrorKind {
    DepthLimitExceeded,
    InvalidScalar,
    Malformed,
    MissingDiscriminator,
    SizeLimitExceeded,
    TypeMismatch,
    UnresolvedDiscriminator,
}

impl DecodeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepthLimitExceeded => "depth_limit_exceeded",
            Self::InvalidScalar => "invalid_scalar",
            Self::Malformed => "malformed",
            Self::MissingDiscriminator => "missing_discriminator",
            Self::SizeLimitExceeded => "size_limit_exceeded",
            Self::TypeMismatch => "type_mismatch",
            Self::UnresolvedDiscriminator => "unresolved_discriminator",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// EncodeError
///
/// Raised when a serialization writer rejects a write.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum EncodeError {
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("duplicate key {key:?}")]
    DuplicateKey { key: String },

    #[error("{path}: {source}")]
    Field {
        path: String,
        #[source]
        source: Box<Self>,
    },

    #[error("invalid writer state: {0}")]
    InvalidState(String),

    #[error("json encode error: {0}")]
    Json(String),

    #[error("non-finite number cannot be encoded")]
    NonFiniteNumber,

    #[error("{kind} value {value} has no wire representation")]
    OutOfRange { kind: &'static str, value: String },
}

impl EncodeError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Prefix the error path with a field name.
    #[must_use]
    pub fn at(self, field: &str) -> Self {
        match self {
            Self::Field { path, source } => Self::Field {
                path: join_path(field, &path),
                source,
            },
            other => Self::Field {
                path: field.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Prefix the error path with a collection index.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        self.at(&format!("[{index}]"))
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Field { path, .. } => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Field { source, .. } => source.root(),
            other => other,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EncodeErrorKind {
        match self.root() {
            Self::DepthLimitExceeded { .. } => EncodeErrorKind::DepthLimitExceeded,
            Self::DuplicateKey { .. } => EncodeErrorKind::DuplicateKey,
            Self::InvalidState(_) | Self::Field { .. } => EncodeErrorKind::InvalidState,
            Self::Json(_) => EncodeErrorKind::Json,
            Self::NonFiniteNumber => EncodeErrorKind::NonFiniteNumber,
            Self::OutOfRange { .. } => EncodeErrorKind::OutOfRange,
        }
    }
}

///
/// EncodeErrorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EncodeErrorKind {
    DepthLimitExceeded,
    DuplicateKey,
    InvalidState,
    Json,
    NonFiniteNumber,
    OutOfRange,
}

impl EncodeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepthLimitExceeded => "depth_limit_exceeded",
            Self::DuplicateKey => "duplicate_key",
            Self::InvalidState => "invalid_state",
            Self::Json => "json",
            Self::NonFiniteNumber => "non_finite_number",
            Self::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// DepthLimited
///
/// Errors that can report an exceeded nesting limit.
///

pub trait DepthLimited {
    fn depth_limit_exceeded(limit: usize) -> Self;
}

impl DepthLimited for DecodeError {
    fn depth_limit_exceeded(limit: usize) -> Self {
        Self::DepthLimitExceeded { limit }
    }
}

impl DepthLimited for EncodeError {
    fn depth_limit_exceeded(limit: usize) -> Self {
        Self::DepthLimitExceeded { limit }
    }
}

// Index segments attach without a separator: `roles[2].displayName`.
fn join_path(head: &str, tail: &str) -> String {
    if tail.starts_with('[') {
        format!("{head}{tail}")
    } else {
        format!("{head}.{tail}")
    }
}
