//! Health check endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::types::{ApiFailure, ApiState, HealthResponse};

/// Handler for GET /health
pub async fn health_handler(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match state.ctx.status().await {
        Ok(status) => {
            let response = HealthResponse {
                status: "ok".to_string(),
                elements: status.elements,
                ideas: status.ideas,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiFailure::from_ops(e, "FETCH_FAILED", "Failed to read store").into_response(),
    }
}
