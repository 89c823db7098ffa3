use crate::{engine::Paginator, rule::Rule};
use model::{core::data_type::SqlDialect, pagination::order::Order};
use serde::{Deserialize, Serialize};

/// One layer of declarative pagination configuration. Every field is
/// optional; applying a layer only touches the fields it explicitly sets.
/// Layers are applied in fixed precedence order: built-in defaults, then the
/// base config, then per-call overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rules: Option<Vec<Rule>>,
    pub keys: Option<Vec<String>>,
    pub first: Option<usize>,
    pub last: Option<usize>,
    pub order: Option<Order>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub invert_order: Option<bool>,
    pub dialect: Option<SqlDialect>,
}

impl Config {
    /// Built-in defaults: key `id`, first page of 10, descending order.
    pub fn defaults() -> Self {
        Config {
            keys: Some(vec!["id".to_string()]),
            first: Some(10),
            order: Some(Order::Desc),
            ..Config::default()
        }
    }

    pub fn apply(&self, paginator: &mut Paginator) {
        if let Some(rules) = &self.rules {
            paginator.set_rules(rules.clone());
        }
        // keys only apply when the same layer does not set full rules
        if self.rules.is_none()
            && let Some(keys) = &self.keys
        {
            paginator.set_keys(keys.clone());
        }
        if let Some(first) = self.first {
            paginator.set_first(first);
        }
        if let Some(last) = self.last {
            paginator.set_last(last);
        }
        if let Some(order) = self.order {
            paginator.set_order(order);
        }
        if let Some(after) = &self.after {
            paginator.set_after_cursor(after.clone());
        }
        if let Some(before) = &self.before {
            paginator.set_before_cursor(before.clone());
        }
        if let Some(invert) = self.invert_order {
            paginator.set_invert(invert);
        }
        if let Some(dialect) = self.dialect {
            paginator.set_dialect(dialect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_apply_in_precedence_order() {
        let base = Config {
            keys: Some(vec!["id".to_string(), "created_at".to_string()]),
            first: Some(25),
            order: Some(Order::Asc),
            ..Config::default()
        };
        let overrides = Config {
            first: Some(5),
            ..Config::default()
        };

        let paginator = Paginator::new(&[base, overrides]);
        assert_eq!(paginator.first(), 5);
        assert_eq!(paginator.order(), Order::Asc);
        assert_eq!(paginator.keys(), vec!["id", "created_at"]);
    }

    #[test]
    fn test_rules_take_precedence_over_keys_within_a_layer() {
        let layer = Config {
            rules: Some(vec![Rule::new("created_at")]),
            keys: Some(vec!["id".to_string()]),
            ..Config::default()
        };
        let paginator = Paginator::new(&[layer]);
        assert_eq!(paginator.keys(), vec!["created_at"]);
    }

    #[test]
    fn test_later_layer_keys_replace_default_rules() {
        let layer = Config {
            keys: Some(vec!["slug".to_string()]),
            ..Config::default()
        };
        let paginator = Paginator::new(&[layer]);
        assert_eq!(paginator.keys(), vec!["slug"]);
    }

    #[test]
    fn test_defaults() {
        let paginator = Paginator::new(&[]);
        assert_eq!(paginator.keys(), vec!["id"]);
        assert_eq!(paginator.first(), 10);
        assert_eq!(paginator.order(), Order::Desc);
    }

    #[test]
    fn test_config_deserializes_from_json() {
        let config: Config = serde_json::from_str(
            r#"{"keys": ["id"], "last": 3, "order": "ASC", "before": "abc"}"#,
        )
        .unwrap();
        assert_eq!(config.last, Some(3));
        assert_eq!(config.order, Some(Order::Asc));
        assert_eq!(config.before.as_deref(), Some("abc"));
    }
}
