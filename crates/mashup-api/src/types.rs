//! API types and DTOs.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use mashup_core::{iso_timestamp, ElementCounts};
use mashup_ops::{OpsContext, OpsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

/// Shared application state for the API.
pub struct ApiState {
    /// The operations context.
    pub ctx: OpsContext,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Active elements per category.
    pub elements: ElementCounts,
    /// Number of saved ideas.
    pub ideas: usize,
}

/// Error payload inside an [`ApiError`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
    /// ISO 8601 timestamp.
    pub timestamp: String,
}

impl ApiError {
    /// Create a new error with the current timestamp.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorBody {
                code: code.into(),
                message: message.into(),
                details: None,
            },
            timestamp: iso_timestamp(Utc::now()),
        }
    }
}

/// An error response: status plus envelope.
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub body: ApiError,
}

impl ApiFailure {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiError::new(code, message),
        }
    }

    /// A 400 `INVALID_REQUEST` failure.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message)
    }

    /// Map an operation error to a response.
    ///
    /// `code` and `message` are used for failures that have no dedicated
    /// mapping. Internal details are logged, never returned.
    pub fn from_ops(err: OpsError, code: &str, message: &str) -> Self {
        match err {
            OpsError::AuthRequired => {
                Self::new(StatusCode::UNAUTHORIZED, "AUTH_REQUIRED", "Authentication required")
            }
            OpsError::InvalidToken => Self::new(
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid authentication token",
            ),
            OpsError::InvalidRequest(reason) => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", reason)
            }
            OpsError::IdeaNotFound { id } => {
                warn!(%id, "Idea not found");
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Idea not found")
            }
            err if err.is_generation() => {
                error!("Generation failed: {}", err);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    "Failed to generate idea",
                )
            }
            err => {
                error!("{} failed: {}", code, err);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, message)
            }
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<QueryRejection> for ApiFailure {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Rejected query: {}", rejection.body_text());
        Self::invalid("Invalid query parameters")
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected body: {}", rejection.body_text());
        Self::invalid("Invalid request body")
    }
}
