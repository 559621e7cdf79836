//! Augmented variant types.
//!
//! Raw payloads stay immutable; augmentation constructs these distinct
//! types instead of growing `_lookup` properties onto shared input. Every
//! lookup maps an id or name to a POSITION in the owned sequence it
//! indexes, and in-database foreign-key targets are sibling indices, so the
//! graph carries no back-references.

use std::collections::HashMap;

use crate::model::{FieldId, FieldType, Operator, TableId};

/// A table after operator enrichment and index building.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedTable {
    pub id: TableId,
    pub name: String,
    /// Carried over from the raw payload; `None` means queryable.
    pub visibility_type: Option<String>,
    /// Enriched fields, in payload order.
    pub fields: Vec<AugmentedField>,
    /// Field id → position in `fields`.
    pub fields_lookup: HashMap<FieldId, usize>,
}

impl AugmentedTable {
    /// Look up a field by id.
    pub fn field(&self, id: FieldId) -> Option<&AugmentedField> {
        self.fields_lookup.get(&id).map(|&idx| &self.fields[idx])
    }

    /// A table is queryable when it carries no visibility marker.
    pub fn is_queryable(&self) -> bool {
        self.visibility_type.is_none()
    }
}

/// A field with its valid operators attached and indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedField {
    pub id: FieldId,
    pub name: String,
    pub field_type: FieldType,
    /// Valid query operators for the field's type, in catalog order.
    pub operators: Vec<Operator>,
    /// Operator name → position in `operators`.
    pub operators_lookup: HashMap<String, usize>,
    /// Foreign-key target, when the raw field declared one.
    pub target: Option<ResolvedTarget>,
}

impl AugmentedField {
    /// Look up an operator by name.
    pub fn operator(&self, name: &str) -> Option<&Operator> {
        self.operators_lookup.get(name).map(|&idx| &self.operators[idx])
    }
}

/// A foreign-key target after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    /// Referenced table id, always present from the raw payload.
    pub table_id: TableId,
    /// The resolved table, when resolution found one.
    pub table: Option<TargetTable>,
}

/// How a resolved target table is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetTable {
    /// Owned one-hop copy fetched from the metadata service. The copy is
    /// enriched and indexed, but its own foreign-key targets keep only
    /// their table id — resolution never recurses past one hop.
    Fetched(Box<AugmentedTable>),
    /// Position of a sibling table in the owning database's `tables`.
    Sibling(usize),
}

/// A database with every table enriched and indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedDatabase {
    pub id: i64,
    pub name: String,
    /// Augmented tables, in payload order.
    pub tables: Vec<AugmentedTable>,
    /// Table id → position in `tables`.
    pub tables_lookup: HashMap<TableId, usize>,
}

impl AugmentedDatabase {
    /// Look up a table by id.
    pub fn table(&self, id: TableId) -> Option<&AugmentedTable> {
        self.tables_lookup.get(&id).map(|&idx| &self.tables[idx])
    }

    /// Resolve a field's foreign-key target to the table it points at.
    ///
    /// Sibling indices resolve against this database's own tables; fetched
    /// one-hop copies are returned directly.
    pub fn target_table<'a>(&'a self, field: &'a AugmentedField) -> Option<&'a AugmentedTable> {
        match field.target.as_ref()?.table.as_ref()? {
            TargetTable::Sibling(idx) => self.tables.get(*idx),
            TargetTable::Fetched(table) => Some(table),
        }
    }
}
