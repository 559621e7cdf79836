//! Raw metadata payload types.
//!
//! These are the shapes handed over by the metadata service, before any
//! enrichment. Augmentation never mutates them; it constructs the distinct
//! types in [`crate::augment`] instead.

pub mod operators;
pub mod table;
pub mod types;

pub use operators::{DefaultOperatorCatalog, Operator, OperatorCatalog};
pub use table::{Database, Field, FieldId, FieldTarget, ForeignKey, Table, TableId};
pub use types::FieldType;
