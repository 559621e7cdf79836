//! # schemagraph
//!
//! Schema metadata augmentation and foreign-key graph resolution for BI
//! query builders.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Raw Payload (metadata service)                  │
//! │     (tables, fields, foreign-key target descriptors)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [augment::enrich]
//! ┌─────────────────────────────────────────────────────────┐
//! │       Enriched Tables (operators + id/name indexes)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [augment::resolve]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Augmented Graph (one-hop foreign-key targets)        │
//! │        consumed read-only by the query-builder UI        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`naming`] module sits outside the pipeline: pure name-convention
//! predicates used by UI grouping, with no dependency on augmentation.
//! Network access is confined to the [`provider::MetadataProvider`] trait,
//! implemented by the embedding system.

pub mod augment;
pub mod lookup;
pub mod model;
pub mod naming;
pub mod provider;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::augment::{
        augment_database, AugmentedDatabase, AugmentedField, AugmentedTable, Augmentor,
        ResolvedTarget, TableWithForeignKeys, TargetTable,
    };
    pub use crate::lookup::build_lookup;
    pub use crate::model::{
        Database, DefaultOperatorCatalog, Field, FieldId, FieldTarget, FieldType, ForeignKey,
        Operator, OperatorCatalog, Table, TableId,
    };
    pub use crate::provider::{MetadataError, MetadataProvider, MetadataResult};
}

// Also export at crate root for convenience
pub use augment::{augment_database, AugmentedDatabase, AugmentedTable, Augmentor};
pub use provider::{MetadataError, MetadataProvider, MetadataResult};
