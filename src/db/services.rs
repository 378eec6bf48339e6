//! High-level store access helpers that work with any repository
//! implementation.

use crate::api::AggregateBucket;
use crate::db::repository::{AggregateRepository, RepositoryResult};

/// Check that the aggregate store is reachable.
pub async fn health_check(repo: &dyn AggregateRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Fetch the buckets for one demographic slice.
pub async fn fetch_percentile_bins(
    repo: &dyn AggregateRepository,
    distance: &str,
    gender: &str,
    age_group_start: i32,
    age_group_end: i32,
) -> RepositoryResult<Vec<AggregateBucket>> {
    repo.fetch_percentile_bins(distance, gender, age_group_start, age_group_end)
        .await
}
