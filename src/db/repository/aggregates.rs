//! Aggregate repository trait: the only boundary the core touches.
//!
//! The store holds pre-computed percentile bins (rectangular buckets of
//! age range x gender x finish-time range, each carrying a participant
//! count). The core only reads from it; ingestion and schema design live
//! upstream.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::AggregateBucket;

/// Repository trait for aggregate-store reads.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust; the three
/// grouping queries of one request may run concurrently.
#[async_trait]
pub trait AggregateRepository: Send + Sync {
    /// Fetch all buckets exactly matching the demographic filter.
    ///
    /// Race-identity filtering, if any, is the store's responsibility. No
    /// ordering is guaranteed or required; degenerate rows (zero count,
    /// zero-width interval) may be returned and are ignored downstream.
    ///
    /// # Arguments
    /// * `distance` - race-distance identifier
    /// * `gender` - store gender code ("M", "F", or "ALL")
    /// * `age_group_start` / `age_group_end` - inclusive bracket bounds
    ///
    /// # Returns
    /// * `Ok(Vec<AggregateBucket>)` - matching buckets, possibly empty
    /// * `Err(RepositoryError)` - if the store is unreachable or the query fails
    async fn fetch_percentile_bins(
        &self,
        distance: &str,
        gender: &str,
        age_group_start: i32,
        age_group_end: i32,
    ) -> RepositoryResult<Vec<AggregateBucket>>;

    /// Check that the store is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` - the store answered
    /// * `Err(RepositoryError)` - if the check could not be performed
    async fn health_check(&self) -> RepositoryResult<bool>;
}
