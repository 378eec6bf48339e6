//! Aggregate store access via the Repository pattern.
//!
//! The store is an external collaborator: it holds pre-computed percentile
//! bins and the core only reads from it through the [`AggregateRepository`]
//! trait. This keeps the estimator a stateless function over its inputs and
//! lets tests run against the in-memory backend without any database.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/) - handlers, validation              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - estimator, assembly        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (db/repository) - abstract interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────┐
//!     │       Local Repository        │
//!     │         (in-memory)           │
//!     └──────────────────────────────┘
//! ```
//!
//! The repository instance is owned by the HTTP application state and passed
//! by reference into the service layer; there is no process-global store
//! handle and no core-side caching of bucket data.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;
pub mod services;

#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
pub use repository::{AggregateRepository, RepositoryError, RepositoryResult};
pub use services::{fetch_percentile_bins, health_check};
