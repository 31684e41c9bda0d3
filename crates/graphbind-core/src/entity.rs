use crate::{
    codec::FieldCodec,
    error::{DecodeError, EncodeError},
    model::{FieldDescriptor, FieldKind, FieldTable, walk},
    serialize::{CodecContext, ParseNode, SerializationWriter},
    traits::Model,
    value::Value,
};
use indexmap::IndexMap;
use std::sync::LazyLock;

/// Reserved wire key carrying the concrete type of an object.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Members no field table claimed, in document order.
pub type AdditionalData = IndexMap<String, Value>;

///
/// Entity
///
/// Root of every model hierarchy: identifier, type tag and the additional
/// data captured for round-tripping.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    id: Option<String>,
    odata_type: Option<String>,
    additional_data: AdditionalData,
}

impl Entity {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, odata_type: Option<String>) {
        self.odata_type = odata_type;
    }

    #[must_use]
    pub const fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub const fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }

    pub fn set_additional_data(&mut self, data: AdditionalData) {
        self.additional_data = data;
    }
}

impl Model for Entity {
    const TYPE_NAME: &'static str = "Entity";
    const ODATA_TYPE: &'static str = "#microsoft.graph.entity";
    const POLYMORPHIC: bool = false;

    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: LazyLock<FieldTable<Entity>> = LazyLock::new(|| {
            FieldTable::builder(Entity::TYPE_NAME)
                .field(FieldDescriptor::value::<String>(
                    "id",
                    |m: &Entity| m.id.as_ref(),
                    |m: &mut Entity, v| m.id = Some(v),
                ))
                .field(FieldDescriptor::value::<String>(
                    ODATA_TYPE_KEY,
                    |m: &Entity| m.odata_type.as_ref(),
                    |m: &mut Entity, v| m.odata_type = Some(v),
                ))
                .build()
        });

        &TABLE
    }

    fn entity(&self) -> &Entity {
        self
    }

    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

impl FieldCodec for Entity {
    fn kind() -> FieldKind {
        FieldKind::Object(Self::TYPE_NAME)
    }

    fn decode(node: &dyn ParseNode, cx: &mut CodecContext<'_>) -> Result<Option<Self>, DecodeError> {
        walk::decode_model(node, cx)
    }

    fn encode(
        &self,
        key: Option<&str>,
        writer: &mut dyn SerializationWriter,
        cx: &mut CodecContext<'_>,
    ) -> Result<(), EncodeError> {
        walk::encode_model(self, key, writer, cx)
    }
}
