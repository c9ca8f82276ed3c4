//! Request DTOs for operations.
//!
//! Each request type encapsulates all the parameters needed for an operation,
//! making it easy to call from CLI, REST API, or programmatically.

use std::collections::BTreeMap;

use mashup_core::{ElementType, GenerationConfigOverrides, IdeaContent};
use serde::{Deserialize, Serialize};

/// Request to generate a single idea.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Category switches applied on top of the server's generation config.
    #[serde(default, flatten)]
    pub config: GenerationConfigOverrides,
}

impl GenerateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override category switches for this request.
    pub fn with_config(mut self, config: impl Into<GenerationConfigOverrides>) -> Self {
        self.config = config.into();
        self
    }
}

/// Request to generate several ideas at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGenerateRequest {
    /// Number of ideas to generate.
    pub count: usize,

    /// Category switches applied on top of the server's generation config.
    #[serde(default, flatten)]
    pub config: GenerationConfigOverrides,
}

impl BatchGenerateRequest {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            config: GenerationConfigOverrides::default(),
        }
    }

    /// Override category switches for this request.
    pub fn with_config(mut self, config: impl Into<GenerationConfigOverrides>) -> Self {
        self.config = config.into();
        self
    }
}

/// Request to save an idea for the authenticated user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveIdeaRequest {
    /// The idea to save. Required.
    #[serde(default)]
    pub content: Option<IdeaContent>,
}

impl SaveIdeaRequest {
    pub fn new(content: IdeaContent) -> Self {
        Self {
            content: Some(content),
        }
    }
}

/// Request for a page of the authenticated user's ideas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListIdeasRequest {
    /// Page size; the configured default when unset.
    #[serde(default)]
    pub limit: Option<usize>,

    /// Number of ideas to skip.
    #[serde(default)]
    pub offset: Option<usize>,
}

impl ListIdeasRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Request to delete one of the authenticated user's ideas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteIdeaRequest {
    /// Idea identifier as given by the caller.
    pub id: String,
}

impl DeleteIdeaRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Request to replace every element pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedRequest {
    /// Contents per element type; every entry is stored as active.
    #[serde(flatten)]
    pub pools: BTreeMap<ElementType, Vec<String>>,
}

impl SeedRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add contents to one pool.
    pub fn with_pool(
        mut self,
        element_type: ElementType,
        contents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.pools
            .entry(element_type)
            .or_default()
            .extend(contents.into_iter().map(Into::into));
        self
    }
}
