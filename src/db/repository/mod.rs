//! Repository trait and error types for the aggregate store boundary.

pub mod aggregates;
pub mod error;

pub use aggregates::AggregateRepository;
pub use error::{RepositoryError, RepositoryResult};
