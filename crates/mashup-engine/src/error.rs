//! Error types for the generation engine.

use mashup_core::ElementType;
use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerationResult<T> = Result<T, GenerationFailed>;

/// The element store could not be read for a category.
#[derive(Debug, Clone, Error)]
#[error("failed to fetch {element_type} elements: {message}")]
pub struct AccessError {
    pub element_type: ElementType,
    pub message: String,
}

impl AccessError {
    pub fn new(element_type: ElementType, message: impl Into<String>) -> Self {
        Self {
            element_type,
            message: message.into(),
        }
    }
}

/// A resolved category has no active elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no active {element_type} elements found")]
pub struct EmptyPoolError {
    pub element_type: ElementType,
}

/// Failure of a single category lookup.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    EmptyPool(#[from] EmptyPoolError),
}

impl LookupError {
    /// Category whose lookup failed.
    pub fn element_type(&self) -> ElementType {
        match self {
            LookupError::Access(e) => e.element_type,
            LookupError::EmptyPool(e) => e.element_type,
        }
    }
}

/// The single failure mode of idea generation.
///
/// Wraps the first category lookup that failed; no partial idea survives it.
#[derive(Debug, Clone, Error)]
#[error("failed to generate idea: {source}")]
pub struct GenerationFailed {
    #[source]
    pub source: LookupError,
}

impl GenerationFailed {
    /// Category whose lookup aborted the generation.
    pub fn element_type(&self) -> ElementType {
        self.source.element_type()
    }

    /// Whether the failure came from an empty pool rather than storage.
    pub fn is_empty_pool(&self) -> bool {
        matches!(self.source, LookupError::EmptyPool(_))
    }
}

impl From<LookupError> for GenerationFailed {
    fn from(source: LookupError) -> Self {
        Self { source }
    }
}
