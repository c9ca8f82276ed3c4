//! Idea Mashup Operations Layer
//!
//! This crate provides a clean, typed API for all idea mashup operations.
//! It can be consumed by both the CLI and REST API, ensuring consistent
//! behavior and type-safe interactions.
//!
//! ## Architecture
//!
//! - **Requests**: Typed input DTOs for each operation
//! - **Responses**: Typed output DTOs with all relevant data
//! - **Store**: JSON persistence of element pools and saved ideas
//! - **OpsContext**: The main service that executes operations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mashup_ops::{Config, GenerateRequest, OpsContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let ctx = OpsContext::open(config).await?;
//!
//!     let response = ctx.generate(GenerateRequest::new()).await?;
//!
//!     println!("{}", response.content.description);
//!     Ok(())
//! }
//! ```

mod auth;
mod config;
mod context;
mod error;
mod requests;
mod responses;
mod store;

// Re-export public API
pub use auth::{bearer_token, AuthUser, TokenRegistry};
pub use config::Config;
pub use context::{OpsContext, MAX_PAGE_SIZE};
pub use error::{OpsError, OpsResult};
pub use requests::*;
pub use responses::*;
pub use store::Store;
