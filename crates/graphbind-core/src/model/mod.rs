mod field;
mod table;

pub mod walk;


pub use field::{Cardinality, FieldDescriptor, FieldKind, FieldReader, FieldWriter};
pub use table::{FieldSchema, FieldTable, FieldTableBuilder, TableSchema};
