//! Idea generation endpoints.
//!
//! Generation is public; category switches come from the query string and
//! are layered over the server's configured defaults.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mashup_core::GenerationConfigOverrides;
use mashup_ops::{BatchGenerateRequest, GenerateRequest};
use serde::Deserialize;
use tracing::info;

use crate::types::{ApiFailure, ApiState};

/// Query parameters for the batch endpoint.
#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    /// Number of ideas to generate.
    #[serde(default)]
    pub count: Option<String>,
}

impl BatchQuery {
    fn count(&self) -> Result<usize, ApiFailure> {
        let raw = self
            .count
            .as_deref()
            .ok_or_else(|| ApiFailure::invalid("Missing required parameter: count"))?;
        raw.trim()
            .parse()
            .map_err(|_| ApiFailure::invalid(format!("Invalid count: {}", raw)))
    }
}

/// POST /ideas/generate - Generate one idea.
pub async fn generate_handler(
    State(state): State<Arc<ApiState>>,
    overrides: Result<Query<GenerationConfigOverrides>, QueryRejection>,
) -> Response {
    let overrides = match overrides {
        Ok(Query(overrides)) => overrides,
        Err(rejection) => return ApiFailure::from(rejection).into_response(),
    };
    let request = GenerateRequest::new().with_config(overrides);

    match state.ctx.generate(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => ApiFailure::from_ops(e, "GENERATION_FAILED", "Failed to generate idea")
            .into_response(),
    }
}

/// POST /ideas/generate/batch?count=N - Generate several ideas.
pub async fn batch_handler(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<BatchQuery>, QueryRejection>,
    overrides: Result<Query<GenerationConfigOverrides>, QueryRejection>,
) -> Response {
    let (query, overrides) = match (query, overrides) {
        (Ok(Query(query)), Ok(Query(overrides))) => (query, overrides),
        (Err(rejection), _) | (_, Err(rejection)) => {
            return ApiFailure::from(rejection).into_response()
        }
    };
    let count = match query.count() {
        Ok(count) => count,
        Err(failure) => return failure.into_response(),
    };
    info!(count, "Batch generation request");

    let request = BatchGenerateRequest::new(count).with_config(overrides);
    match state.ctx.generate_batch(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => ApiFailure::from_ops(e, "GENERATION_FAILED", "Failed to generate ideas")
            .into_response(),
    }
}
