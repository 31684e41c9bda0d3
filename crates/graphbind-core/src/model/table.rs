use crate::model::{Cardinality, FieldDescriptor, FieldKind};
use serde::Serialize;
use std::collections::HashMap;

///
/// FieldTable
///
/// Immutable, ordered map from wire name to field descriptor for one model
/// type. Built once per type and shared for the life of the process.
///

#[derive(Debug)]
pub struct FieldTable<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    index: HashMap<&'static str, usize>,
}

impl<T: 'static> FieldTable<T> {
    #[must_use]
    pub const fn builder(type_name: &'static str) -> FieldTableBuilder<T> {
        FieldTableBuilder {
            type_name,
            fields: Vec::new(),
        }
    }
}

impl<T> FieldTable<T> {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldDescriptor::name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serializable description of this table.
    #[must_use]
    pub fn schema(&self) -> TableSchema {
        TableSchema {
            type_name: self.type_name,
            fields: self
                .fields
                .iter()
                .map(|f| FieldSchema {
                    name: f.name(),
                    kind: f.kind(),
                    cardinality: f.cardinality(),
                })
                .collect(),
        }
    }
}

///
/// FieldTableBuilder
///

#[derive(Debug)]
pub struct FieldTableBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> FieldTableBuilder<T> {
    /// Copy every entry of an embedded base type's table, in its order.
    #[must_use]
    pub fn inherit<B: 'static>(
        mut self,
        base: &FieldTable<B>,
        project: fn(&T) -> &B,
        project_mut: fn(&mut T) -> &mut B,
    ) -> Self {
        for field in base.iter() {
            self = self.field(field.clone().lift(project, project_mut));
        }

        self
    }

    /// Append a field, or replace an existing entry of the same name in place.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor<T>) -> Self {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }

        self
    }

    #[must_use]
    pub fn build(self) -> FieldTable<T> {
        let index = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name(), i))
            .collect();

        FieldTable {
            type_name: self.type_name,
            fields: self.fields,
            index,
        }
    }
}

///
/// TableSchema
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableSchema {
    pub type_name: &'static str,
    pub fields: Vec<FieldSchema>,
}

///
/// FieldSchema
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
}
