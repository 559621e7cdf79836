//! Field operator enrichment and table index building.

use crate::lookup::build_lookup;
use crate::model::{Field, OperatorCatalog, Table};

use super::graph::{AugmentedField, AugmentedTable, ResolvedTarget};

/// Attach the valid operator set for the field's type and index it by name.
///
/// Operators are rebuilt from the catalog on every call, never appended, so
/// enrichment cannot duplicate them. A declared foreign-key target comes
/// out unresolved; resolution is a separate step.
pub fn enrich_field(field: Field, catalog: &impl OperatorCatalog) -> AugmentedField {
    let operators = catalog.operators_for(field.field_type);
    let operators_lookup = build_lookup(&operators, |op| op.name.clone());

    AugmentedField {
        id: field.id,
        name: field.name,
        field_type: field.field_type,
        operators,
        operators_lookup,
        target: field.target.map(|t| ResolvedTarget {
            table_id: t.table_id,
            table: None,
        }),
    }
}

/// Enrich every field of a raw table and build the table's field index.
pub fn populate_query_options(table: Table, catalog: &impl OperatorCatalog) -> AugmentedTable {
    let fields: Vec<AugmentedField> = table
        .fields
        .into_iter()
        .map(|field| enrich_field(field, catalog))
        .collect();
    let fields_lookup = build_lookup(&fields, |field| field.id);

    AugmentedTable {
        id: table.id,
        name: table.name,
        visibility_type: table.visibility_type,
        fields,
        fields_lookup,
    }
}

/// Re-run enrichment over an already augmented table.
///
/// Rebuilds every operator set and every lookup from scratch; the result is
/// structurally identical to the first application. Resolved foreign-key
/// targets are kept as they are.
pub fn reenrich(table: AugmentedTable, catalog: &impl OperatorCatalog) -> AugmentedTable {
    let AugmentedTable {
        id,
        name,
        visibility_type,
        fields,
        fields_lookup: _,
    } = table;

    let fields: Vec<AugmentedField> = fields
        .into_iter()
        .map(|field| {
            let operators = catalog.operators_for(field.field_type);
            let operators_lookup = build_lookup(&operators, |op| op.name.clone());
            AugmentedField {
                operators,
                operators_lookup,
                ..field
            }
        })
        .collect();
    let fields_lookup = build_lookup(&fields, |field| field.id);

    AugmentedTable {
        id,
        name,
        visibility_type,
        fields,
        fields_lookup,
    }
}
