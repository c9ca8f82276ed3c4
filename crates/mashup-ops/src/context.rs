//! OpsContext - The main service for executing operations.
//!
//! The OpsContext holds configuration, the store and the token registry and
//! provides methods for all idea mashup operations. It can be used by CLI,
//! REST API, or any other consumer.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use mashup_core::{GenerationConfig, GenerationElement, Idea};
use mashup_engine::{GenerationResult, MashupGenerator};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{AuthUser, TokenRegistry};
use crate::config::Config;
use crate::error::{OpsError, OpsResult};
use crate::requests::*;
use crate::responses::*;
use crate::store::Store;

/// Largest page a list request may ask for.
pub const MAX_PAGE_SIZE: usize = 100;

/// The main operations context.
///
/// Cheap to clone; the store is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct OpsContext {
    /// Configuration for operations.
    pub config: Config,

    store: Arc<Store>,
    tokens: TokenRegistry,
}

impl OpsContext {
    /// Create a new OpsContext over an already opened store.
    pub fn new(config: Config, store: Arc<Store>) -> Self {
        let tokens = TokenRegistry::from_config(&config);
        Self {
            config,
            store,
            tokens,
        }
    }

    /// Open the store in the configured data directory.
    pub async fn open(config: Config) -> OpsResult<Self> {
        let store = Store::open(&config.data_dir).await?;
        Ok(Self::new(config, Arc::new(store)))
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Generator over the shared store.
    fn generator(&self, config: GenerationConfig) -> MashupGenerator<Store> {
        MashupGenerator::with_config(Arc::clone(&self.store), config)
    }

    /// Run a generation under the configured timeout.
    async fn with_timeout<T>(
        &self,
        generation: impl Future<Output = GenerationResult<T>>,
    ) -> OpsResult<T> {
        let secs = self.config.generation_timeout_secs;
        match tokio::time::timeout(Duration::from_secs(secs), generation).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!(secs, "Idea generation timed out");
                Err(OpsError::GenerationTimeout { secs })
            }
        }
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Generate a single idea.
    pub async fn generate(&self, request: GenerateRequest) -> OpsResult<GenerateResponse> {
        let config = self.config.generation.merged(&request.config);
        let generator = self.generator(config);

        let content = self.with_timeout(generator.generate_idea()).await?;
        let response = GenerateResponse::new(content);

        info!(id = %response.id, "Generated idea");
        Ok(response)
    }

    /// Generate several ideas; all succeed or the whole batch fails.
    pub async fn generate_batch(
        &self,
        request: BatchGenerateRequest,
    ) -> OpsResult<BatchGenerateResponse> {
        if request.count > self.config.max_batch_size {
            return Err(OpsError::invalid(format!(
                "count must be at most {}",
                self.config.max_batch_size
            )));
        }

        let config = self.config.generation.merged(&request.config);
        let generator = self.generator(config);

        let contents = self
            .with_timeout(generator.generate_multiple_ideas(request.count))
            .await?;
        let ideas: Vec<GenerateResponse> =
            contents.into_iter().map(GenerateResponse::new).collect();

        info!(count = ideas.len(), "Generated idea batch");
        Ok(BatchGenerateResponse { ideas })
    }

    // =========================================================================
    // Saved ideas
    // =========================================================================

    /// Resolve an `Authorization` header to a user.
    pub fn authenticate(&self, header: Option<&str>) -> OpsResult<AuthUser> {
        self.tokens.authenticate_header(header)
    }

    /// Save an idea for the user.
    pub async fn save_idea(
        &self,
        user: &AuthUser,
        request: SaveIdeaRequest,
    ) -> OpsResult<SaveIdeaResponse> {
        let content = request
            .content
            .ok_or_else(|| OpsError::invalid("Missing required field: content"))?;

        let id = self.store.insert_idea(Idea::new(&user.id, content)).await?;

        info!(%id, user = %user.id, "Saved idea");
        Ok(SaveIdeaResponse {
            id,
            message: "Idea saved successfully".to_string(),
        })
    }

    /// List the user's ideas, newest first.
    pub async fn list_ideas(
        &self,
        user: &AuthUser,
        request: ListIdeasRequest,
    ) -> OpsResult<ListIdeasResponse> {
        let limit = request
            .limit
            .unwrap_or(self.config.default_page_size)
            .min(MAX_PAGE_SIZE);
        let offset = request.offset.unwrap_or(0);

        let (ideas, total) = self.store.list_ideas(&user.id, limit, offset).await;
        Ok(ListIdeasResponse { ideas, total })
    }

    /// Delete one of the user's ideas.
    pub async fn delete_idea(
        &self,
        user: &AuthUser,
        request: DeleteIdeaRequest,
    ) -> OpsResult<DeleteIdeaResponse> {
        let id: Uuid = request
            .id
            .parse()
            .map_err(|_| OpsError::invalid(format!("Invalid idea ID: {}", request.id)))?;

        if !self.store.delete_idea(id, &user.id).await? {
            return Err(OpsError::IdeaNotFound { id });
        }

        info!(%id, user = %user.id, "Deleted idea");
        Ok(DeleteIdeaResponse {
            message: "Idea deleted successfully".to_string(),
        })
    }

    // =========================================================================
    // Element pools
    // =========================================================================

    /// Replace every element pool with the given contents.
    pub async fn seed(&self, request: SeedRequest) -> OpsResult<SeedResponse> {
        let elements: Vec<GenerationElement> = request
            .pools
            .iter()
            .flat_map(|(element_type, contents)| {
                contents
                    .iter()
                    .map(|content| content.trim())
                    .filter(|content| !content.is_empty())
                    .map(move |content| GenerationElement::new(*element_type, content))
            })
            .collect();

        self.store.replace_elements(&elements).await?;
        let counts = self.store.element_counts().await?;

        info!(total = elements.len(), "Seeded element pools");
        Ok(SeedResponse {
            counts,
            total: elements.len(),
        })
    }

    /// Element counts and saved idea count.
    pub async fn status(&self) -> OpsResult<StatusResponse> {
        Ok(StatusResponse {
            data_dir: self.store.dir().to_path_buf(),
            elements: self.store.element_counts().await?,
            ideas: self.store.idea_count().await,
        })
    }
}
