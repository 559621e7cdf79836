//! Query operator records and the type-to-operator catalog.

use serde::{Deserialize, Serialize};

use super::types::FieldType;

/// A query operator attached to a field during enrichment.
///
/// Semantics are opaque to this crate: the record is passthrough data that
/// the embedding application uses for query construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// Identifying name (e.g. `=`, `CONTAINS`, `BETWEEN`).
    pub name: String,
    /// Human-readable name for UI display.
    pub verbose_name: String,
    /// Number of operand values the operator takes.
    pub arity: u8,
}

impl Operator {
    /// Create an operator record.
    pub fn new(name: impl Into<String>, verbose_name: impl Into<String>, arity: u8) -> Self {
        Self {
            name: name.into(),
            verbose_name: verbose_name.into(),
            arity,
        }
    }
}

/// Maps a field's type classification to its valid query operators.
///
/// This is the collaborator seam for operator assignment: enrichment calls
/// it once per field and attaches whatever it returns. Implementations must
/// be pure — the same type always yields the same operator list — so that
/// re-running enrichment is idempotent.
pub trait OperatorCatalog {
    /// The valid operators for fields of `field_type`.
    fn operators_for(&self, field_type: FieldType) -> Vec<Operator>;
}

/// Built-in catalog covering the standard filter operators per type bucket.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOperatorCatalog;

impl OperatorCatalog for DefaultOperatorCatalog {
    fn operators_for(&self, field_type: FieldType) -> Vec<Operator> {
        match field_type {
            FieldType::Number | FieldType::Coordinate => vec![
                Operator::new("=", "Equal to", 1),
                Operator::new("!=", "Not equal to", 1),
                Operator::new(">", "Greater than", 1),
                Operator::new("<", "Less than", 1),
                Operator::new("BETWEEN", "Between", 2),
                Operator::new("IS_NULL", "Is empty", 0),
                Operator::new("NOT_NULL", "Not empty", 0),
            ],
            FieldType::Text => vec![
                Operator::new("=", "Is", 1),
                Operator::new("!=", "Is not", 1),
                Operator::new("CONTAINS", "Contains", 1),
                Operator::new("DOES_NOT_CONTAIN", "Does not contain", 1),
                Operator::new("STARTS_WITH", "Starts with", 1),
                Operator::new("ENDS_WITH", "Ends with", 1),
                Operator::new("IS_NULL", "Is empty", 0),
                Operator::new("NOT_NULL", "Not empty", 0),
            ],
            FieldType::Boolean => vec![
                Operator::new("=", "Is", 1),
                Operator::new("IS_NULL", "Is empty", 0),
                Operator::new("NOT_NULL", "Not empty", 0),
            ],
            FieldType::Temporal => vec![
                Operator::new("=", "On", 1),
                Operator::new("<", "Before", 1),
                Operator::new(">", "After", 1),
                Operator::new("BETWEEN", "Between", 2),
                Operator::new("IS_NULL", "Is empty", 0),
                Operator::new("NOT_NULL", "Not empty", 0),
            ],
            FieldType::Pk | FieldType::Fk => vec![
                Operator::new("=", "Is", 1),
                Operator::new("!=", "Is not", 1),
                Operator::new("IS_NULL", "Is empty", 0),
                Operator::new("NOT_NULL", "Not empty", 0),
            ],
            FieldType::Unknown => vec![
                Operator::new("=", "Is", 1),
                Operator::new("!=", "Is not", 1),
            ],
        }
    }
}
