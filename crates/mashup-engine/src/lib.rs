//! Idea mashup generation engine.
//!
//! Combines one randomly selected element per category into an idea record
//! with a templated, human-readable description.
//!
//! ## Pipeline
//!
//! ```text
//! GenerationConfig ─► resolve_categories ─► (fetch_active + pick_one) per category, concurrently
//!                                                         │ join
//!                                                         ▼
//!                                      Selection ─► compose_description ─► IdeaContent
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mashup_core::ElementType;
//! use mashup_engine::{InMemoryElementStore, MashupGenerator};
//!
//! # async fn run() -> Result<(), mashup_engine::GenerationFailed> {
//! let store = InMemoryElementStore::from_pools([
//!     (ElementType::Persona, &["Nurses"][..]),
//!     (ElementType::Problem, &["shift scheduling"][..]),
//!     (ElementType::Technology, &["computer vision"][..]),
//!     (ElementType::BusinessModel, &["freemium"][..]),
//! ]);
//! let generator = MashupGenerator::with_config(
//!     Arc::new(store),
//!     mashup_core::GenerationConfig::core_only(),
//! );
//! let idea = generator.generate_idea().await?;
//! println!("{}", idea.description);
//! # Ok(())
//! # }
//! ```

mod composer;
mod error;
mod generator;
mod resolver;
mod selector;
mod store;

pub use composer::compose_description;
pub use error::{AccessError, EmptyPoolError, GenerationFailed, GenerationResult, LookupError};
pub use generator::MashupGenerator;
pub use resolver::{resolve_categories, ResolvedCategories};
pub use selector::{pick_one, pick_one_with};
pub use store::{ElementStore, InMemoryElementStore};
