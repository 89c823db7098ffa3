use model::{core::value::Value, records::row::RowData};
use thiserror::Error;

/// Error reported by a query-builder implementation. Carries the driver's
/// message and optionally the underlying error; the engine passes it through
/// without retrying or reinterpreting it.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct QueryError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        QueryError {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        QueryError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The consumed query-engine capability. The engine hands over clause text
/// with positional arguments; the implementation owns everything else
/// (statement assembly, binding, connection, timeouts).
///
/// `fetch_into` must append matching rows to `dest` in the order determined
/// by the ORDER BY clause it was given.
pub trait QueryBuilder {
    fn order_by(&mut self, clause: &str);
    fn filter(&mut self, predicate: &str, args: Vec<Value>);
    fn limit(&mut self, limit: usize);
    fn fetch_into(&mut self, dest: &mut Vec<RowData>) -> Result<(), QueryError>;
}
