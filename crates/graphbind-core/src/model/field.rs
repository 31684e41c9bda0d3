use crate::{
    codec::{self, FieldCodec},
    config::EmptyCollectionPolicy,
    error::{DecodeError, EncodeError},
    serialize::{CodecContext, ParseNode, SerializationWriter},
};
use derive_more::{Display, FromStr};
use serde::Serialize;
use std::{fmt, sync::Arc};

///
/// FieldKind
///
/// Wire type of one field, as reported in schemas and diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Blob,
    Bool,
    Date,
    Duration,
    Enum(&'static str),
    Float64,
    Int32,
    Int64,
    Object(&'static str),
    Text,
    TimeOfDay,
    Timestamp,
    Untyped,
    Uuid,
}

impl FieldKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::Duration => "Duration",
            Self::Enum(path) | Self::Object(path) => path,
            Self::Float64 => "Float64",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Text => "Text",
            Self::TimeOfDay => "TimeOfDay",
            Self::Timestamp => "Timestamp",
            Self::Untyped => "Untyped",
            Self::Uuid => "Uuid",
        }
    }
}

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
pub enum Cardinality {
    Opt,
    Many,
}

pub type FieldReader<T> = Arc<
    dyn Fn(&mut T, &dyn ParseNode, &mut CodecContext<'_>) -> Result<(), DecodeError> + Send + Sync,
>;

pub type FieldWriter<T> = Arc<
    dyn Fn(&T, &mut dyn SerializationWriter, &mut CodecContext<'_>) -> Result<(), EncodeError>
        + Send
        + Sync,
>;

///
/// FieldDescriptor
///
/// One entry of a field table: the wire name, its kind, and the reader and
/// writer that move the value between a parse node and the model.
///
/// Readers only touch the model when a value was produced; `null` leaves the
/// current value in place. Writers skip absent values.
///

pub struct FieldDescriptor<T> {
    name: &'static str,
    kind: FieldKind,
    cardinality: Cardinality,
    read: FieldReader<T>,
    write: FieldWriter<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// Single-valued field backed by an `Option<V>`.
    pub fn value<V: FieldCodec + 'static>(
        name: &'static str,
        get: fn(&T) -> Option<&V>,
        set: fn(&mut T, V),
    ) -> Self {
        Self {
            name,
            kind: V::kind(),
            cardinality: Cardinality::Opt,
            read: Arc::new(
                move |model: &mut T, node: &dyn ParseNode, cx: &mut CodecContext<'_>| {
                    if let Some(value) = V::decode(node, cx)? {
                        set(model, value);
                    }
                    Ok(())
                },
            ),
            write: Arc::new(
                move |model: &T, writer: &mut dyn SerializationWriter, cx: &mut CodecContext<'_>| {
                    match get(model) {
                        Some(value) => value.encode(Some(name), writer, cx),
                        None => Ok(()),
                    }
                },
            ),
        }
    }

    /// Collection field backed by an `Option<Vec<V>>`.
    pub fn collection<V: FieldCodec + 'static>(
        name: &'static str,
        get: fn(&T) -> Option<&[V]>,
        set: fn(&mut T, Vec<V>),
    ) -> Self {
        Self {
            name,
            kind: V::kind(),
            cardinality: Cardinality::Many,
            read: Arc::new(
                move |model: &mut T, node: &dyn ParseNode, cx: &mut CodecContext<'_>| {
                    if let Some(items) = codec::decode_collection::<V>(node, cx)? {
                        set(model, items);
                    }
                    Ok(())
                },
            ),
            write: Arc::new(
                move |model: &T, writer: &mut dyn SerializationWriter, cx: &mut CodecContext<'_>| {
                    let Some(items) = get(model) else {
                        return Ok(());
                    };
                    if items.is_empty()
                        && cx.config().empty_collections == EmptyCollectionPolicy::Omit
                    {
                        return Ok(());
                    }

                    codec::encode_collection(items, Some(name), writer, cx)
                },
            ),
        }
    }

    /// Re-target this descriptor at an enclosing model that embeds `T`.
    #[must_use]
    pub fn lift<U: 'static>(
        self,
        project: fn(&U) -> &T,
        project_mut: fn(&mut U) -> &mut T,
    ) -> FieldDescriptor<U> {
        let read = self.read;
        let write = self.write;

        FieldDescriptor {
            name: self.name,
            kind: self.kind,
            cardinality: self.cardinality,
            read: Arc::new(
                move |model: &mut U, node: &dyn ParseNode, cx: &mut CodecContext<'_>| {
                    read(project_mut(model), node, cx)
                },
            ),
            write: Arc::new(
                move |model: &U, writer: &mut dyn SerializationWriter, cx: &mut CodecContext<'_>| {
                    write(project(model), writer, cx)
                },
            ),
        }
    }
}

impl<T> FieldDescriptor<T> {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn read(
        &self,
        model: &mut T,
        node: &dyn ParseNode,
        cx: &mut CodecContext<'_>,
    ) -> Result<(), DecodeError> {
        (self.read)(model, node, cx)
    }

    pub fn write(
        &self,
        model: &T,
        writer: &mut dyn SerializationWriter,
        cx: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        (self.write)(model, writer, cx)
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            cardinality: self.cardinality,
            read: Arc::clone(&self.read),
            write: Arc::clone(&self.write),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("cardinality", &self.cardinality)
            .finish_non_exhaustive()
    }
}
