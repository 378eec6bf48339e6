//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{extract::State, Json};

use super::dto::{validate_ranking_request, HealthResponse, RankingRequest, RankingResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::ranking;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the aggregate
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Ranking
// =============================================================================

/// POST /v1/running
///
/// Rank one race performance against the aggregate population: overall, by
/// gender, and by gender + age bracket.
pub async fn analyze_running(
    State(state): State<AppState>,
    Json(request): Json<RankingRequest>,
) -> HandlerResult<RankingResponse> {
    validate_ranking_request(&request).map_err(AppError::BadRequest)?;

    let response = ranking::compute_ranking(state.repository.as_ref(), &request).await?;
    Ok(Json(response))
}
