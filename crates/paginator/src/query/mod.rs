use crate::query::ast::{BinaryOp, BinaryOperator, Expr};
use model::core::value::Value;

pub mod ast;
pub mod dialect;
pub mod render;

pub fn sql(fragment: impl Into<String>) -> Expr {
    Expr::Sql(fragment.into())
}

pub fn bind(val: Value) -> Expr {
    Expr::Bind(val)
}

pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
}
