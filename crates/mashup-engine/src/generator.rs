//! The mashup generator: fan out per-category lookups, join, compose.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use mashup_core::{
    ElementType, GenerationConfig, GenerationConfigOverrides, IdeaContent, OptionalCategory,
    Selection,
};
use tracing::{debug, warn};

use crate::composer::compose_description;
use crate::error::{GenerationFailed, GenerationResult, LookupError};
use crate::resolver::resolve_categories;
use crate::selector::pick_one;
use crate::store::ElementStore;

/// Generates idea mashups from the pools of an element store.
///
/// Stateless between calls; the only state is the config fixed at
/// construction and the injected store.
#[derive(Debug)]
pub struct MashupGenerator<S: ?Sized> {
    config: GenerationConfig,
    store: Arc<S>,
}

impl<S: ?Sized> Clone for MashupGenerator<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ElementStore + ?Sized> MashupGenerator<S> {
    /// Create a generator with the default config.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, GenerationConfig::default())
    }

    /// Create a generator with a fully specified config.
    pub fn with_config(store: Arc<S>, config: GenerationConfig) -> Self {
        Self { config, store }
    }

    /// Create a generator whose config is the defaults merged with `overrides`.
    pub fn with_overrides(store: Arc<S>, overrides: &GenerationConfigOverrides) -> Self {
        Self::with_config(store, GenerationConfig::default().merged(overrides))
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a single idea.
    ///
    /// Every resolved category is fetched and picked concurrently; the
    /// description is composed only once all of them have succeeded.
    pub async fn generate_idea(&self) -> GenerationResult<IdeaContent> {
        let selection = self.select().await.inspect_err(|e| {
            warn!(category = %e.element_type(), error = %e, "Idea generation failed");
        })?;

        let description = compose_description(&selection);
        Ok(IdeaContent::from_selection(selection, description, Utc::now()))
    }

    /// Generate `count` ideas concurrently.
    ///
    /// Results keep the order in which generations were started. Any failure
    /// fails the whole batch.
    pub async fn generate_multiple_ideas(&self, count: usize) -> GenerationResult<Vec<IdeaContent>> {
        try_join_all((0..count).map(|_| self.generate_idea())).await
    }

    /// Pick one value for every resolved category.
    pub async fn select(&self) -> GenerationResult<Selection> {
        let resolved = resolve_categories(&self.config);
        debug!(categories = ?resolved.element_types(), "Resolved categories");

        let core = async {
            futures::try_join!(
                self.lookup(ElementType::Persona),
                self.lookup(ElementType::Problem),
                self.lookup(ElementType::Technology),
                self.lookup(ElementType::BusinessModel),
            )
        };
        let optional = try_join_all(resolved.optional().iter().map(|category| async move {
            let value = self.lookup(category.element_type()).await?;
            Ok::<(OptionalCategory, String), LookupError>((*category, value))
        }));

        let ((persona, problem, technology, business_model), optional) =
            futures::try_join!(core, optional).map_err(GenerationFailed::from)?;

        let selection = optional.into_iter().fold(
            Selection::new(persona, problem, technology, business_model),
            |selection, (category, value)| selection.with_optional(category, value),
        );
        Ok(selection)
    }

    /// Fetch the active pool of one category and pick from it.
    async fn lookup(&self, element_type: ElementType) -> Result<String, LookupError> {
        let pool = self.store.fetch_active(element_type).await?;
        debug!(category = %element_type, pool_size = pool.len(), "Fetched pool");
        Ok(pick_one(element_type, &pool)?)
    }
}
