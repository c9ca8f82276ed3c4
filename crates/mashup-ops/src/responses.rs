//! Response DTOs for operations.
//!
//! Each response type contains all the data produced by an operation,
//! making it easy to consume from CLI, REST API, or programmatically.

use std::path::PathBuf;

use mashup_core::{ElementCounts, Idea, IdeaContent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freshly generated, unsaved idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Identifier for this generation.
    pub id: Uuid,

    /// The generated idea.
    pub content: IdeaContent,
}

impl GenerateResponse {
    pub fn new(content: IdeaContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
        }
    }
}

/// Response from a batch generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGenerateResponse {
    /// Generated ideas, in request order.
    pub ideas: Vec<GenerateResponse>,
}

impl BatchGenerateResponse {
    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }
}

/// Response from saving an idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveIdeaResponse {
    /// Identifier of the stored idea.
    pub id: Uuid,

    pub message: String,
}

/// A page of saved ideas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListIdeasResponse {
    /// Ideas on this page, newest first.
    pub ideas: Vec<Idea>,

    /// Total number of ideas the user has saved.
    pub total: usize,
}

/// Response from deleting an idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteIdeaResponse {
    pub message: String,
}

/// Response from seeding the element pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    /// Active elements per type after seeding.
    pub counts: ElementCounts,

    /// Number of elements written.
    pub total: usize,
}

/// Store status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Data directory in use.
    pub data_dir: PathBuf,

    /// Active elements per type.
    pub elements: ElementCounts,

    /// Saved ideas across all users.
    pub ideas: usize,
}

impl StatusResponse {
    /// Element types with no active element.
    pub fn empty_pools(&self) -> Vec<mashup_core::ElementType> {
        self.elements
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(element_type, _)| *element_type)
            .collect()
    }
}
