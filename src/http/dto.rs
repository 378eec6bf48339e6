//! Data Transfer Objects for the HTTP API.
//!
//! The ranking request/response types live in [`crate::api`] since they are
//! the core-to-caller contract; this module re-exports them and adds the
//! HTTP-only types plus request validation.

use serde::{Deserialize, Serialize};

// Re-export the core contract types, which already derive Serialize/Deserialize.
pub use crate::api::{
    AggregateBucket, Gender, HistogramBin, HistogramResult, RankingRequest, RankingResponse,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Aggregate store connection status
    pub database: String,
}

/// Validate a ranking request before it reaches the estimator.
///
/// Malformed demographics are rejected here; everything past this point is a
/// defined computation with no failure path of its own. (An unrecognized
/// gender never gets this far: serde rejects it during deserialization.)
pub fn validate_ranking_request(request: &RankingRequest) -> Result<(), String> {
    if !request.record_seconds.is_finite() || request.record_seconds <= 0.0 {
        return Err(format!(
            "record_seconds must be a positive number of seconds, got {}",
            request.record_seconds
        ));
    }
    if request.age < 0 {
        return Err(format!("age must be non-negative, got {}", request.age));
    }
    if request.distance.trim().is_empty() {
        return Err("distance must not be empty".to_string());
    }
    Ok(())
}
