//! Database-specific placeholder syntax.

use model::core::data_type::SqlDialect;

pub trait Dialect: Send + Sync {
    /// Returns the placeholder for the parameter at `index` (zero-based).
    ///
    /// - MySQL uses `?`
    /// - PostgreSQL uses `$1`, `$2`, etc.
    fn placeholder(&self, index: usize) -> String;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> &'static str {
        "MySQL"
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn name(&self) -> &'static str {
        "PostgreSQL"
    }
}

pub fn dialect_for(dialect: SqlDialect) -> &'static dyn Dialect {
    match dialect {
        SqlDialect::MySql => &MySql,
        SqlDialect::Postgres => &Postgres,
    }
}
