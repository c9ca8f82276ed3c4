//! Bearer token extractor.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use mashup_ops::AuthUser;

use crate::types::{ApiFailure, ApiState};

/// The caller, resolved from the `Authorization: Bearer <token>` header.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthUser);

impl FromRequestParts<Arc<ApiState>> for Authenticated {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        state
            .ctx
            .authenticate(header)
            .map(Authenticated)
            .map_err(|e| ApiFailure::from_ops(e, "AUTH_REQUIRED", "Authentication required"))
    }
}
