use crate::{builder::QueryError, codec::CursorError};
use model::pagination::order::OrderParseError;
use thiserror::Error;

/// Failure modes of a pagination call. Validation and cursor errors are
/// raised before any query executes; execution errors come from the
/// collaborator and are surfaced unchanged.
#[derive(Debug, Error)]
pub enum PaginateError {
    /// No pagination key/rule was configured.
    #[error("no pagination rule configured")]
    NoRule,

    /// The same key appears in more than one rule.
    #[error("duplicate pagination key `{0}`")]
    DuplicateKey(String),

    /// An order value from external input could not be parsed.
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] OrderParseError),

    /// A rule names a field the destination schema does not declare.
    #[error("unknown pagination key `{key}` on table `{table}`")]
    InvalidField { table: String, key: String },

    /// The supplied cursor could not be decoded against the configured keys.
    #[error("invalid cursor: {0}")]
    InvalidCursor(#[from] CursorError),

    /// The query-builder collaborator failed during execution.
    #[error("query execution failed: {0}")]
    Execution(#[from] QueryError),
}
