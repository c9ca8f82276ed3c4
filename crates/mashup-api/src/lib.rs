//! REST API service for Idea Mashup.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check with element and idea counts
//! - `POST /ideas/generate` - Generate one idea
//! - `POST /ideas/generate/batch?count=N` - Generate several ideas
//! - `GET /ideas?limit=&offset=` - List the caller's saved ideas (auth)
//! - `POST /ideas` - Save an idea (auth)
//! - `DELETE /ideas/{id}` - Delete a saved idea (auth)
//!
//! Generation accepts `includeFormats`, `includeChannels`,
//! `includeActionVerbs` and `includeTrends` as query parameters.
//! Failures use the envelope
//! `{ "error": { "code", "message" }, "timestamp" }`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mashup_api::{create_api_router, create_api_state};
//! use mashup_ops::{Config, OpsContext};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let ctx = OpsContext::open(config).await?;
//! let router = create_api_router(create_api_state(ctx));
//! # Ok(())
//! # }
//! ```

mod auth;
mod routes;
mod types;

pub use auth::Authenticated;
pub use routes::create_api_router;
pub use types::{ApiError, ApiErrorBody, ApiFailure, ApiState, HealthResponse};

use std::sync::Arc;

use mashup_ops::OpsContext;

/// Create a new API state over an operations context.
pub fn create_api_state(ctx: OpsContext) -> Arc<ApiState> {
    Arc::new(ApiState { ctx })
}
