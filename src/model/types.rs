//! Field type classification.

use serde::{Deserialize, Serialize};

/// Classification of a field, sufficient to determine its valid query
/// operators.
///
/// The metadata service reports a declared type per field; this enum is the
/// coarse bucket the operator catalog keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form text.
    Text,
    /// Integer or floating-point numeric.
    Number,
    /// True/false.
    Boolean,
    /// Date, time, or timestamp.
    Temporal,
    /// Primary-key column.
    Pk,
    /// Foreign-key column.
    Fk,
    /// Latitude/longitude component.
    Coordinate,
    /// Unclassified by the service.
    Unknown,
}

impl FieldType {
    /// Whether fields of this type can carry a foreign-key target.
    pub fn is_key(self) -> bool {
        matches!(self, Self::Pk | Self::Fk)
    }
}
