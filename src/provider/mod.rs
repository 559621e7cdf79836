//! Metadata provider abstraction.
//!
//! The augmentation pipeline consumes exactly two externally supplied fetch
//! capabilities: table metadata and foreign-key lists. Both live behind the
//! [`MetadataProvider`] trait, implemented by the embedding system (an HTTP
//! client in production, an in-memory map in tests). Cancellation, timeouts,
//! and retries belong to the implementation, not to this crate.
//!
//! # Example
//!
//! ```ignore
//! use schemagraph::provider::{MetadataProvider, MetadataResult};
//!
//! async fn example(provider: &impl MetadataProvider) -> MetadataResult<()> {
//!     let table = provider.table_metadata(42).await?;
//!     let fks = provider.table_foreign_keys(42).await?;
//!     Ok(())
//! }
//! ```

mod error;

pub use error::{MetadataError, MetadataResult};

use async_trait::async_trait;

use crate::model::{ForeignKey, Table, TableId};

/// Trait for fetching raw table metadata.
///
/// Errors surface as [`MetadataError`] and propagate through augmentation
/// untouched.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch the complete raw metadata payload for a table.
    async fn table_metadata(&self, table_id: TableId) -> MetadataResult<Table>;

    /// Fetch the foreign-key relationships declared on a table.
    async fn table_foreign_keys(&self, table_id: TableId) -> MetadataResult<Vec<ForeignKey>>;
}
