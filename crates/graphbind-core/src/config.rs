use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid codec config: {0}")]
    Invalid(String),

    #[error("failed to read codec config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse codec config: {0}")]
    Parse(String),
}

///
/// DiscriminatorPolicy
///
/// What to do when an object's `@odata.type` is missing or names no known
/// subtype of the expected family.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscriminatorPolicy {
    /// Unknown tags fall back to the base type and are reported.
    #[default]
    Lenient,
    /// Unknown tags are an error; a missing tag selects the base type.
    Strict,
    /// Both missing and unknown tags are errors.
    RequireTag,
}

///
/// EmptyCollectionPolicy
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCollectionPolicy {
    /// `Some(vec![])` is written as `[]`.
    #[default]
    Emit,
    /// `Some(vec![])` is left out like `None`.
    Omit,
}

///
/// CodecConfig
///
/// Knobs for one decode or encode call. Every key is optional in TOML;
/// missing keys take the defaults below.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub discriminator: DiscriminatorPolicy,
    pub empty_collections: EmptyCollectionPolicy,
    pub preserve_additional_data: bool,
    pub max_depth: usize,
    pub max_document_bytes: usize,
}

impl CodecConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 4 * 1024 * 1024;

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        if self.max_document_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_document_bytes must be at least 1".into(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub const fn with_discriminator(mut self, policy: DiscriminatorPolicy) -> Self {
        self.discriminator = policy;
        self
    }

    #[must_use]
    pub const fn with_empty_collections(mut self, policy: EmptyCollectionPolicy) -> Self {
        self.empty_collections = policy;
        self
    }

    #[must_use]
    pub const fn with_preserve_additional_data(mut self, preserve: bool) -> Self {
        self.preserve_additional_data = preserve;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            discriminator: DiscriminatorPolicy::default(),
            empty_collections: EmptyCollectionPolicy::default(),
            preserve_additional_data: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_document_bytes: Self::DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}
