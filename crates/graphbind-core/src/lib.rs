//! Core runtime for graphbind: parse nodes and writers, scalar and enum
//! codecs, field tables, discriminator resolution, and the `Entity` root
//! shared by every model.

extern crate self as graphbind_core;

#[macro_use]
mod macros;

// public exports are one module level down
pub mod codec;
pub mod config;
pub mod discriminator;
pub mod entity;
pub mod error;
pub mod model;
pub mod obs;
pub mod serialize;
pub mod traits;
pub mod types;
pub mod value;

pub use error::Error;
pub use serialize::{deserialize, serialize};

///
/// Prelude
///
/// Domain vocabulary for model crates: the traits, the root entity and the
/// wire scalar types. Errors and writers stay one level down.
///

pub mod prelude {
    pub use crate::{
        codec::{EnumValue, FieldCodec},
        config::CodecConfig,
        entity::Entity,
        traits::Model,
        types::{Blob, Date, IsoDuration, TimeOfDay, Timestamp, Uuid},
        value::Value,
    };
}
