//! Element store accessor.
//!
//! The [`ElementStore`] trait abstracts over the storage backend so the
//! generator doesn't couple to a specific persistence layer.

use async_trait::async_trait;
use mashup_core::{ElementType, GenerationElement};

use crate::error::AccessError;

/// Read-only access to the element pools.
#[async_trait]
pub trait ElementStore: Send + Sync {
    /// Contents of every active element of the given type, in storage order.
    async fn fetch_active(&self, element_type: ElementType) -> Result<Vec<String>, AccessError>;
}

#[async_trait]
impl<S: ElementStore + ?Sized> ElementStore for std::sync::Arc<S> {
    async fn fetch_active(&self, element_type: ElementType) -> Result<Vec<String>, AccessError> {
        (**self).fetch_active(element_type).await
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Element pools held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryElementStore {
    elements: Vec<GenerationElement>,
}

impl InMemoryElementStore {
    pub fn new(elements: Vec<GenerationElement>) -> Self {
        Self { elements }
    }

    /// Build a store with one active element per content string.
    pub fn from_pools<'a>(
        pools: impl IntoIterator<Item = (ElementType, &'a [&'a str])>,
    ) -> Self {
        let elements = pools
            .into_iter()
            .flat_map(|(element_type, contents)| {
                contents
                    .iter()
                    .map(move |content| GenerationElement::new(element_type, *content))
            })
            .collect();
        Self { elements }
    }

    /// Add an element to the store.
    pub fn insert(&mut self, element: GenerationElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[GenerationElement] {
        &self.elements
    }
}

#[async_trait]
impl ElementStore for InMemoryElementStore {
    async fn fetch_active(&self, element_type: ElementType) -> Result<Vec<String>, AccessError> {
        Ok(self
            .elements
            .iter()
            .filter(|e| e.element_type == element_type && e.active)
            .map(|e| e.content.clone())
            .collect())
    }
}
