use crate::{entity::Entity, model::FieldTable};
use std::fmt::Debug;

pub use graphbind_derive::Model;

///
/// Model
///
/// A graph entity type with a static field table. Implemented by
/// `#[derive(Model)]`; `Entity` implements it by hand as the root of every
/// hierarchy.
///

pub trait Model: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Rust type name, used in diagnostics and metrics.
    const TYPE_NAME: &'static str;

    /// Discriminator value identifying this type on the wire.
    const ODATA_TYPE: &'static str;

    /// Whether `new()` stamps `ODATA_TYPE` into `@odata.type`.
    const POLYMORPHIC: bool;

    fn field_table() -> &'static FieldTable<Self>;

    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    /// Factory: an empty instance, tagged when the type takes part in a
    /// polymorphic family.
    #[must_use]
    fn new() -> Self {
        let mut model = Self::default();
        if Self::POLYMORPHIC {
            model
                .entity_mut()
                .set_odata_type(Some(Self::ODATA_TYPE.to_string()));
        }

        model
    }
}
