//! Minimal expression AST for the clauses the engine emits.

use model::{core::value::Value, pagination::order::Order};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An already-resolved SQL fragment (qualified column, COALESCE wrapper),
    /// rendered verbatim.
    Sql(String),

    /// A positional bind parameter.
    Bind(Value),

    /// A binary operation, e.g. `users.id > ?`.
    BinaryOp(Box<BinaryOp>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,
    Lt,
    Gt,
    And,
    Or,
}

/// One `ORDER BY` element: a resolved SQL expression plus its direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: String,
    pub order: Order,
}

/// Joins order elements into the clause text handed to the query builder.
pub fn order_by_clause(items: &[OrderByExpr]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", item.expr, item.order))
        .collect::<Vec<_>>()
        .join(", ")
}
