use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared column type of a pagination key. Cursor decoding checks decoded
/// values against this, so a stale or hand-crafted cursor fails loudly instead
/// of feeding a mistyped comparison argument into the query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    Int,
    IntUnsigned,
    Float,
    Boolean,
    String,
    Uuid,
    Bytes,
    Date,
    Timestamp,
    Json,
    Null,
}

/// Placeholder syntax family of the target database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    MySql,
    Postgres,
}

impl DataType {
    /// Whether a decoded value is acceptable for a column of this type.
    /// NULL is always acceptable; it is substituted later by the rule's
    /// replacement value.
    pub fn matches(&self, value: &Value) -> bool {
        value.is_null() || value.data_type() == *self
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int => "int",
            DataType::IntUnsigned => "int unsigned",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::String => "string",
            DataType::Uuid => "uuid",
            DataType::Bytes => "bytes",
            DataType::Date => "date",
            DataType::Timestamp => "timestamp",
            DataType::Json => "json",
            DataType::Null => "null",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_variant() {
        assert!(DataType::Int.matches(&Value::Int(1)));
        assert!(!DataType::Int.matches(&Value::Uint(1)));
        assert!(!DataType::Timestamp.matches(&Value::String("2024".into())));
    }

    #[test]
    fn test_null_matches_everything() {
        assert!(DataType::Timestamp.matches(&Value::Null));
        assert!(DataType::Int.matches(&Value::Null));
    }
}
