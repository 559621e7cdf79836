//! Foreign-key target resolution.

use std::collections::HashMap;

use futures::future::try_join_all;
use log::debug;

use crate::model::{OperatorCatalog, TableId};
use crate::provider::{MetadataProvider, MetadataResult};

use super::enrich::populate_query_options;
use super::graph::{AugmentedTable, TargetTable};

/// Resolve every foreign-key target of `table` through the metadata
/// provider.
///
/// All target fetches are issued together and joined: the first failure
/// fails the whole resolution and no partially resolved table is returned.
/// Fetched targets are enriched and indexed, but their own foreign-key
/// targets stay unresolved — depth is exactly one hop. Fields without a
/// target are left untouched.
pub async fn resolve_targets<P, C>(
    mut table: AugmentedTable,
    provider: &P,
    catalog: &C,
) -> MetadataResult<AugmentedTable>
where
    P: MetadataProvider + ?Sized,
    C: OperatorCatalog,
{
    let pending: Vec<(usize, TableId)> = table
        .fields
        .iter()
        .enumerate()
        .filter_map(|(idx, field)| field.target.as_ref().map(|t| (idx, t.table_id)))
        .collect();

    if pending.is_empty() {
        return Ok(table);
    }

    debug!(
        "resolving {} foreign-key targets for table {} ({})",
        pending.len(),
        table.id,
        table.name
    );

    let fetches = pending.iter().map(|&(_, table_id)| provider.table_metadata(table_id));
    let fetched = try_join_all(fetches).await?;

    for ((idx, _), raw) in pending.into_iter().zip(fetched) {
        let resolved = populate_query_options(raw, catalog);
        if let Some(target) = table.fields[idx].target.as_mut() {
            target.table = Some(TargetTable::Fetched(Box::new(resolved)));
        }
    }

    Ok(table)
}

/// Attach foreign-key targets from an in-memory table index.
///
/// The fetch-free counterpart of [`resolve_targets`], used when augmenting
/// a whole database: targets resolve strictly against siblings already in
/// memory, and a target id absent from the index is left unresolved rather
/// than treated as an error.
pub fn attach_sibling_targets(table: &mut AugmentedTable, tables_lookup: &HashMap<TableId, usize>) {
    for field in &mut table.fields {
        if let Some(target) = field.target.as_mut() {
            target.table = tables_lookup
                .get(&target.table_id)
                .map(|&idx| TargetTable::Sibling(idx));
        }
    }
}
