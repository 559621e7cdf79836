//! Table and database augmentation.
//!
//! The orchestration layer over enrichment and foreign-key resolution:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  augment_table (async)      │  augment_database (sync)   │
//! │  - enrich + index fields    │  - enrich + index tables   │
//! │  - fetch FK targets,        │  - attach FK targets from  │
//! │    fan-out then join        │    in-memory siblings only │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A detached single table resolves its targets over the metadata provider
//! (one hop, fail-fast fan-out). A whole database never fetches: its
//! foreign keys resolve against its own tables, and unknown targets stay
//! unresolved.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use schemagraph::augment::Augmentor;
//!
//! let augmentor = Augmentor::new(Arc::new(api_client));
//! let loaded = augmentor.load_table_and_foreign_keys(42).await?;
//! let customer = loaded.table.field(7).and_then(|f| f.target.as_ref());
//! ```

mod enrich;
mod graph;
mod resolve;

pub use enrich::{enrich_field, populate_query_options, reenrich};
pub use graph::{
    AugmentedDatabase, AugmentedField, AugmentedTable, ResolvedTarget, TargetTable,
};
pub use resolve::{attach_sibling_targets, resolve_targets};

use std::sync::Arc;

use futures::try_join;
use log::debug;

use crate::lookup::build_lookup;
use crate::model::{Database, DefaultOperatorCatalog, ForeignKey, OperatorCatalog, Table, TableId};
use crate::provider::{MetadataProvider, MetadataResult};

/// A detached table together with its raw foreign-key relationship list.
#[derive(Debug, Clone, PartialEq)]
pub struct TableWithForeignKeys {
    /// The fully augmented table.
    pub table: AugmentedTable,
    /// Raw relationship records, passed through untouched.
    pub foreign_keys: Vec<ForeignKey>,
}

/// Orchestrates metadata fetches and augmentation.
///
/// Wraps a shared [`MetadataProvider`] and an operator catalog. Fetch
/// failures propagate unmodified out of every method; nothing is retried
/// or substituted.
pub struct Augmentor<P: MetadataProvider, C: OperatorCatalog = DefaultOperatorCatalog> {
    /// The metadata fetch collaborator (shared reference).
    provider: Arc<P>,
    /// Type-to-operator collaborator for enrichment.
    catalog: C,
}

impl<P: MetadataProvider> Augmentor<P> {
    /// Create an augmentor with the default operator catalog.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            catalog: DefaultOperatorCatalog,
        }
    }
}

impl<P: MetadataProvider, C: OperatorCatalog> Augmentor<P, C> {
    /// Create an augmentor with a custom operator catalog.
    pub fn with_catalog(provider: Arc<P>, catalog: C) -> Self {
        Self { provider, catalog }
    }

    /// Enrich and index a raw table, then resolve its foreign-key targets
    /// over the metadata provider.
    pub async fn augment_table(&self, table: Table) -> MetadataResult<AugmentedTable> {
        let table = populate_query_options(table, &self.catalog);
        resolve_targets(table, self.provider.as_ref(), &self.catalog).await
    }

    /// Fetch a table's metadata and foreign-key list concurrently, then
    /// augment the table.
    ///
    /// Either fetch failing fails the whole call.
    pub async fn load_table_and_foreign_keys(
        &self,
        table_id: TableId,
    ) -> MetadataResult<TableWithForeignKeys> {
        debug!("loading table {} with foreign keys", table_id);

        let (table, foreign_keys) = try_join!(
            self.provider.table_metadata(table_id),
            self.provider.table_foreign_keys(table_id),
        )?;

        let table = self.augment_table(table).await?;

        Ok(TableWithForeignKeys {
            table,
            foreign_keys,
        })
    }

    /// Augment a whole database with this augmentor's catalog.
    ///
    /// Synchronous and fetch-free; see [`augment_database`].
    pub fn augment_database(&self, database: Database) -> AugmentedDatabase {
        augment_database_with(database, &self.catalog)
    }
}

/// Augment a database using the default operator catalog.
///
/// Builds the table index, enriches every field of every table, and
/// resolves foreign-key targets strictly against the database's own tables.
/// A target id with no matching sibling is left unresolved. No fetches
/// happen here, so no provider is needed.
pub fn augment_database(database: Database) -> AugmentedDatabase {
    augment_database_with(database, &DefaultOperatorCatalog)
}

/// Augment a database with a specific operator catalog.
pub fn augment_database_with(
    database: Database,
    catalog: &impl OperatorCatalog,
) -> AugmentedDatabase {
    let mut tables: Vec<AugmentedTable> = database
        .tables
        .into_iter()
        .map(|table| populate_query_options(table, catalog))
        .collect();
    let tables_lookup = build_lookup(&tables, |table| table.id);

    for table in &mut tables {
        attach_sibling_targets(table, &tables_lookup);
    }

    AugmentedDatabase {
        id: database.id,
        name: database.name,
        tables,
        tables_lookup,
    }
}
