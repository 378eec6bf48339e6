//! In-memory aggregate store for unit testing and local development.
//!
//! Holds buckets behind an `RwLock`; reads clone the matching rows so the
//! stored data is never mutated by a request.

use std::path::Path;

use async_trait::async_trait;
use log::info;
use parking_lot::RwLock;

use crate::api::AggregateBucket;
use crate::db::repository::{AggregateRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of [`AggregateRepository`].
#[derive(Default)]
pub struct LocalRepository {
    buckets: RwLock<Vec<AggregateBucket>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with buckets.
    pub fn with_buckets(buckets: Vec<AggregateBucket>) -> Self {
        LocalRepository {
            buckets: RwLock::new(buckets),
        }
    }

    /// Append buckets to the store.
    pub fn insert_buckets(&self, mut buckets: Vec<AggregateBucket>) {
        self.buckets.write().append(&mut buckets);
    }

    /// Load buckets from a JSON file (an array of bucket objects) and append
    /// them to the store. Returns the number of buckets loaded.
    pub fn load_json_file(&self, path: &Path) -> RepositoryResult<usize> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "cannot read aggregate seed file {}: {}",
                path.display(),
                e
            ))
        })?;
        let buckets: Vec<AggregateBucket> = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::configuration(format!(
                "invalid aggregate seed file {}: {}",
                path.display(),
                e
            ))
        })?;
        let loaded = buckets.len();
        self.insert_buckets(buckets);
        info!("loaded {} aggregate buckets from {}", loaded, path.display());
        Ok(loaded)
    }

    /// Number of buckets currently stored.
    pub fn len(&self) -> usize {
        self.buckets.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.read().is_empty()
    }
}

#[async_trait]
impl AggregateRepository for LocalRepository {
    async fn fetch_percentile_bins(
        &self,
        distance: &str,
        gender: &str,
        age_group_start: i32,
        age_group_end: i32,
    ) -> RepositoryResult<Vec<AggregateBucket>> {
        let buckets = self.buckets.read();
        Ok(buckets
            .iter()
            .filter(|b| {
                b.distance == distance
                    && b.gender == gender
                    && b.age_group_start == age_group_start
                    && b.age_group_end == age_group_end
            })
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
