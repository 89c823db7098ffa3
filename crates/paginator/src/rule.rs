use crate::error::PaginateError;
use model::{
    core::value::Value, pagination::order::Order, schema::table::TableSchema,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One pagination key as configured by the caller. Unset parts are filled in
/// during per-call resolution: the SQL expression from the destination schema
/// and the order from the engine-wide default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Rule {
    pub key: String,
    pub order: Option<Order>,
    pub sql_expr: Option<String>,
    pub null_replacement: Option<Value>,
}

impl Rule {
    pub fn new(key: &str) -> Self {
        Rule {
            key: key.to_string(),
            ..Rule::default()
        }
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_sql_expr(mut self, sql_expr: &str) -> Self {
        self.sql_expr = Some(sql_expr.to_string());
        self
    }

    pub fn with_null_replacement(mut self, replacement: Value) -> Self {
        self.null_replacement = Some(replacement);
        self
    }
}

/// A rule with every derived part filled in, valid for one pagination call.
/// Configured rules are never mutated; each call resolves a fresh list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub key: String,
    pub order: Order,
    pub sql_expr: String,
    pub null_replacement: Option<Value>,
}

/// Checks rule-set invariants that do not need the schema: at least one rule,
/// no duplicate keys.
pub fn validate(rules: &[Rule]) -> Result<(), PaginateError> {
    if rules.is_empty() {
        return Err(PaginateError::NoRule);
    }
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.key.to_ascii_lowercase()) {
            return Err(PaginateError::DuplicateKey(rule.key.clone()));
        }
    }
    Ok(())
}

/// Resolves every rule against the destination schema: derives the qualified
/// column expression when unset, wraps it in COALESCE when a NULL replacement
/// is configured, and fills missing orders from the engine default. Fails
/// with `InvalidField` when a key is not declared on the schema.
pub fn resolve(
    rules: &[Rule],
    schema: &TableSchema,
    default_order: Order,
) -> Result<Vec<ResolvedRule>, PaginateError> {
    rules
        .iter()
        .map(|rule| {
            let field = schema
                .get(&rule.key)
                .ok_or_else(|| PaginateError::InvalidField {
                    table: schema.table().to_string(),
                    key: rule.key.clone(),
                })?;

            let mut sql_expr = match &rule.sql_expr {
                Some(expr) => expr.clone(),
                None => schema.column_expr(field),
            };
            if let Some(replacement) = &rule.null_replacement {
                sql_expr = format!("COALESCE({sql_expr}, {replacement})");
            }

            Ok(ResolvedRule {
                key: rule.key.clone(),
                order: rule.order.unwrap_or(default_order),
                sql_expr,
                null_replacement: rule.null_replacement.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::data_type::DataType;

    fn schema() -> TableSchema {
        TableSchema::new("users")
            .field("id", DataType::Int)
            .field("CreatedAt", DataType::Timestamp)
            .field_with_column("rank", "user_rank", DataType::Int)
    }

    #[test]
    fn test_validate_rejects_empty_rules() {
        assert!(matches!(validate(&[]), Err(PaginateError::NoRule)));
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let rules = vec![Rule::new("id"), Rule::new("ID")];
        assert!(matches!(
            validate(&rules),
            Err(PaginateError::DuplicateKey(key)) if key == "ID"
        ));
    }

    #[test]
    fn test_resolve_derives_column_and_order() {
        let rules = vec![Rule::new("CreatedAt")];
        let resolved = resolve(&rules, &schema(), Order::Desc).unwrap();
        assert_eq!(resolved[0].sql_expr, "users.created_at");
        assert_eq!(resolved[0].order, Order::Desc);
    }

    #[test]
    fn test_resolve_respects_explicit_parts() {
        let rules = vec![
            Rule::new("id")
                .with_order(Order::Asc)
                .with_sql_expr("u.id"),
        ];
        let resolved = resolve(&rules, &schema(), Order::Desc).unwrap();
        assert_eq!(resolved[0].sql_expr, "u.id");
        assert_eq!(resolved[0].order, Order::Asc);
    }

    #[test]
    fn test_resolve_uses_column_override() {
        let rules = vec![Rule::new("rank")];
        let resolved = resolve(&rules, &schema(), Order::Asc).unwrap();
        assert_eq!(resolved[0].sql_expr, "users.user_rank");
    }

    #[test]
    fn test_resolve_wraps_null_replacement_in_coalesce() {
        let rules = vec![Rule::new("rank").with_null_replacement(Value::Int(0))];
        let resolved = resolve(&rules, &schema(), Order::Asc).unwrap();
        assert_eq!(resolved[0].sql_expr, "COALESCE(users.user_rank, 0)");
    }

    #[test]
    fn test_resolve_fails_on_unknown_key() {
        let rules = vec![Rule::new("nope")];
        assert!(matches!(
            resolve(&rules, &schema(), Order::Asc),
            Err(PaginateError::InvalidField { key, .. }) if key == "nope"
        ));
    }

    #[test]
    fn test_resolve_does_not_mutate_input() {
        let rules = vec![Rule::new("id")];
        let _ = resolve(&rules, &schema(), Order::Asc).unwrap();
        assert_eq!(rules[0].sql_expr, None);
        assert_eq!(rules[0].order, None);
    }
}
