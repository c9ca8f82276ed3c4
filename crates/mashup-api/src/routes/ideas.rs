//! Saved idea endpoints. All of them require a bearer token.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mashup_ops::{DeleteIdeaRequest, ListIdeasRequest, SaveIdeaRequest};

use crate::auth::Authenticated;
use crate::types::{ApiFailure, ApiState};

/// GET /ideas?limit&offset - List the caller's ideas, newest first.
pub async fn list_handler(
    State(state): State<Arc<ApiState>>,
    Authenticated(user): Authenticated,
    query: Result<Query<ListIdeasRequest>, QueryRejection>,
) -> Response {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => return ApiFailure::from(rejection).into_response(),
    };

    match state.ctx.list_ideas(&user, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => ApiFailure::from_ops(e, "FETCH_FAILED", "Failed to fetch ideas").into_response(),
    }
}

/// POST /ideas - Save an idea.
pub async fn save_handler(
    State(state): State<Arc<ApiState>>,
    Authenticated(user): Authenticated,
    body: Result<Json<SaveIdeaRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return ApiFailure::from(rejection).into_response(),
    };

    match state.ctx.save_idea(&user, request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => ApiFailure::from_ops(e, "SAVE_FAILED", "Failed to save idea").into_response(),
    }
}

/// DELETE /ideas/{id} - Delete one of the caller's ideas.
pub async fn delete_handler(
    State(state): State<Arc<ApiState>>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.ctx.delete_idea(&user, DeleteIdeaRequest::new(id)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => ApiFailure::from_ops(e, "DELETE_FAILED", "Failed to delete idea").into_response(),
    }
}
