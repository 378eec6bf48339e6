//! Error types for repository operations.
//!
//! The estimator itself has no failure path; everything surfaced here is an
//! upstream store problem raised before any computation runs.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Store connection failure. Typically transient; retrying is the
    /// transport layer's decision, not the core's.
    #[error("connection error in {operation}: {message}")]
    Connection { operation: String, message: String },

    /// Query execution failure.
    #[error("query error in {operation}: {message}")]
    Query { operation: String, message: String },

    /// Configuration or initialization failure (bad seed file, missing
    /// settings).
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl RepositoryError {
    /// Create a connection error with the operation that failed.
    pub fn connection(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RepositoryError::Connection {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a query error with the operation that failed.
    pub fn query(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RepositoryError::Query {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        RepositoryError::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error is plausibly transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::Connection { .. })
    }
}
