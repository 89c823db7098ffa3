pub mod builder;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod rule;

pub use builder::{QueryBuilder, QueryError};
pub use config::Config;
pub use engine::Paginator;
pub use error::PaginateError;
pub use rule::Rule;
