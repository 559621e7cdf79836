//! Raw table, field, and database payloads.

use serde::{Deserialize, Serialize};

use super::types::FieldType;

/// Identifier of a table in the metadata service.
pub type TableId = i64;

/// Identifier of a field.
pub type FieldId = i64;

/// Raw table payload as returned by the metadata service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    /// Non-queryable tables carry a visibility marker; `None` means the
    /// table is queryable.
    #[serde(default)]
    pub visibility_type: Option<String>,
    /// Fields in service order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Table {
    /// A table is queryable when it carries no visibility marker.
    pub fn is_queryable(&self) -> bool {
        self.visibility_type.is_none()
    }
}

/// Raw field payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    /// Declared type, used to pick valid query operators.
    pub field_type: FieldType,
    /// Present only when the field is a foreign key.
    #[serde(default)]
    pub target: Option<FieldTarget>,
}

/// Foreign-key target descriptor on a raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTarget {
    /// Id of the referenced table.
    pub table_id: TableId,
}

/// Raw database payload: the ordered set of its tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A foreign-key relationship record.
///
/// Passthrough data: the crate fetches and returns these alongside an
/// augmented table but never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Field on the origin table.
    pub origin_id: FieldId,
    /// Field on the destination table.
    pub destination_id: FieldId,
    /// Optional relationship label from the service.
    #[serde(default)]
    pub relationship: Option<String>,
}
