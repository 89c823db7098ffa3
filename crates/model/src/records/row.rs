use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One row of a paginated result set, as filled in by the query-builder
/// collaborator. Field names are matched case-insensitively so logical key
/// names (`Id`, `CreatedAt`) find their columns regardless of casing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    /// Value of a field, with SQL NULL (absent value) collapsing to `Value::Null`.
    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}
