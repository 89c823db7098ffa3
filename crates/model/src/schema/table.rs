use crate::core::data_type::DataType;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// Declared column of a record type. When `column` is unset the physical name
/// is the snake_case form of the logical field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub column: Option<String>,
    pub data_type: DataType,
}

impl FieldSchema {
    pub fn column_name(&self) -> String {
        match &self.column {
            Some(column) => column.clone(),
            None => self.name.to_case(Case::Snake),
        }
    }
}

/// Explicit schema descriptor for a destination record type: table name plus
/// the fields pagination rules may refer to. Built once per record type by the
/// caller; stands in for the tag/reflection metadata of ORM-managed models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSchema {
    table: String,
    fields: Vec<FieldSchema>,
}

impl TableSchema {
    pub fn new(table: &str) -> Self {
        TableSchema {
            table: table.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, data_type: DataType) -> Self {
        self.fields.push(FieldSchema {
            name: name.to_string(),
            column: None,
            data_type,
        });
        self
    }

    pub fn field_with_column(mut self, name: &str, column: &str, data_type: DataType) -> Self {
        self.fields.push(FieldSchema {
            name: name.to_string(),
            column: Some(column.to_string()),
            data_type,
        });
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Fully qualified SQL expression for a field, e.g. `users.created_at`.
    pub fn column_expr(&self, field: &FieldSchema) -> String {
        format!("{}.{}", self.table, field.column_name())
    }
}
