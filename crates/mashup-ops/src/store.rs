//! Persistence layer using JSON files in the data directory.
//!
//! Element pools are re-read from `elements.json` on every fetch so that a
//! reseed is picked up by a running server. Saved ideas are loaded once and
//! written through to `ideas.json` on every change.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mashup_core::{ElementCounts, ElementType, GenerationElement, Idea};
use mashup_engine::{AccessError, ElementStore};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{OpsError, OpsResult};

const ELEMENTS_FILE: &str = "elements.json";
const IDEAS_FILE: &str = "ideas.json";

/// Store manages the data directory and persistence operations.
#[derive(Debug)]
pub struct Store {
    /// Path to the data directory.
    dir: PathBuf,

    /// Saved ideas, oldest first.
    ideas: RwLock<Vec<Idea>>,
}

impl Store {
    /// Open the store at `dir`, creating the directory if needed.
    pub async fn open(dir: impl AsRef<Path>) -> OpsResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;

        let ideas_path = dir.join(IDEAS_FILE);
        let ideas: Vec<Idea> = read_json(&ideas_path).await?.unwrap_or_default();

        info!(path = %dir.display(), ideas = ideas.len(), "Opened store");
        Ok(Self {
            dir,
            ideas: RwLock::new(ideas),
        })
    }

    /// Get the path to the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn elements_path(&self) -> PathBuf {
        self.dir.join(ELEMENTS_FILE)
    }

    fn ideas_path(&self) -> PathBuf {
        self.dir.join(IDEAS_FILE)
    }

    // =========================================================================
    // Generation elements
    // =========================================================================

    /// Load every stored element, active or not.
    pub async fn elements(&self) -> OpsResult<Vec<GenerationElement>> {
        Ok(read_json(&self.elements_path()).await?.unwrap_or_default())
    }

    /// Replace all stored elements.
    pub async fn replace_elements(&self, elements: &[GenerationElement]) -> OpsResult<()> {
        let path = self.elements_path();
        let json = serde_json::to_string_pretty(elements)?;
        write_atomic(&path, json.as_bytes()).await?;

        info!(path = %path.display(), elements = elements.len(), "Saved elements");
        Ok(())
    }

    /// Count active elements per type. Every type is present in the result.
    pub async fn element_counts(&self) -> OpsResult<ElementCounts> {
        let mut counts: ElementCounts = ElementType::ALL.into_iter().map(|t| (t, 0)).collect();
        for element in self.elements().await?.iter().filter(|e| e.active) {
            *counts.entry(element.element_type).or_insert(0) += 1;
        }
        Ok(counts)
    }

    // =========================================================================
    // Ideas
    // =========================================================================

    /// Persist a new idea.
    pub async fn insert_idea(&self, idea: Idea) -> OpsResult<Uuid> {
        let id = idea.id;
        let mut ideas = self.ideas.write().await;
        let mut updated = ideas.clone();
        updated.push(idea);
        self.flush_ideas(&updated).await?;
        *ideas = updated;

        debug!(%id, "Inserted idea");
        Ok(id)
    }

    /// A page of the user's ideas, newest first, plus the user's total.
    pub async fn list_ideas(&self, user_id: &str, limit: usize, offset: usize) -> (Vec<Idea>, usize) {
        let ideas = self.ideas.read().await;
        let mut owned: Vec<&Idea> = ideas.iter().rev().filter(|i| i.user_id == user_id).collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = owned.len();
        let page = owned.into_iter().skip(offset).take(limit).cloned().collect();
        (page, total)
    }

    /// Delete the idea if it belongs to the user. Returns whether it was removed.
    pub async fn delete_idea(&self, id: Uuid, user_id: &str) -> OpsResult<bool> {
        let mut ideas = self.ideas.write().await;
        let updated: Vec<Idea> = ideas
            .iter()
            .filter(|i| !(i.id == id && i.user_id == user_id))
            .cloned()
            .collect();
        if updated.len() == ideas.len() {
            return Ok(false);
        }
        self.flush_ideas(&updated).await?;
        *ideas = updated;

        debug!(%id, "Deleted idea");
        Ok(true)
    }

    /// Number of saved ideas across all users.
    pub async fn idea_count(&self) -> usize {
        self.ideas.read().await.len()
    }

    async fn flush_ideas(&self, ideas: &[Idea]) -> OpsResult<()> {
        let json = serde_json::to_string_pretty(ideas)?;
        write_atomic(&self.ideas_path(), json.as_bytes()).await
    }
}

#[async_trait]
impl ElementStore for Store {
    async fn fetch_active(&self, element_type: ElementType) -> Result<Vec<String>, AccessError> {
        let elements = self
            .elements()
            .await
            .map_err(|e| AccessError::new(element_type, e.to_string()))?;

        Ok(elements
            .into_iter()
            .filter(|e| e.element_type == element_type && e.active)
            .map(|e| e.content)
            .collect())
    }
}

/// Replace `path` through a temp file in the same directory, so readers
/// only ever see the old or the new contents.
async fn write_atomic(path: &Path, contents: &[u8]) -> OpsResult<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    tokio::fs::write(&tmp, contents).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

/// Read a JSON file; `None` if it doesn't exist.
async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> OpsResult<Option<T>> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| OpsError::CorruptStore {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mashup_core::{IdeaContent, Selection};
    use tempfile::TempDir;

    fn content(persona: &str) -> IdeaContent {
        IdeaContent::from_selection(
            Selection::new(persona, "p", "t", "b"),
            "desc".to_string(),
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_missing_files_mean_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("data")).await.unwrap();

        assert!(store.elements().await.unwrap().is_empty());
        assert!(store.fetch_active(ElementType::Persona).await.unwrap().is_empty());
        assert_eq!(store.idea_count().await, 0);
        assert_eq!(store.element_counts().await.unwrap().len(), ElementType::ALL.len());
    }

    #[tokio::test]
    async fn test_fetch_active_filters() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path()).await.unwrap();
        store
            .replace_elements(&[
                GenerationElement::new(ElementType::Persona, "Nurses"),
                GenerationElement::new(ElementType::Persona, "Pilots").deactivated(),
                GenerationElement::new(ElementType::Trend, "AI"),
            ])
            .await
            .unwrap();

        assert_eq!(
            store.fetch_active(ElementType::Persona).await.unwrap(),
            vec!["Nurses".to_string()]
        );
        let counts = store.element_counts().await.unwrap();
        assert_eq!(counts[&ElementType::Persona], 1);
        assert_eq!(counts[&ElementType::Trend], 1);
        assert_eq!(counts[&ElementType::Format], 0);
    }

    #[tokio::test]
    async fn test_corrupt_elements_file_is_access_error() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path()).await.unwrap();
        std::fs::write(temp.path().join(ELEMENTS_FILE), "{not json").unwrap();

        let err = store.fetch_active(ElementType::Problem).await.unwrap_err();
        assert_eq!(err.element_type, ElementType::Problem);
    }

    #[tokio::test]
    async fn test_ideas_persist_and_page() {
        let temp = TempDir::new().unwrap();
        {
            let store = Store::open(temp.path()).await.unwrap();
            for persona in ["first", "second", "third"] {
                store.insert_idea(Idea::new("alice", content(persona))).await.unwrap();
                tokio::time::sleep(std::time::Duration::from_millis(2)).await;
            }
            store.insert_idea(Idea::new("bob", content("other"))).await.unwrap();
        }

        let store = Store::open(temp.path()).await.unwrap();
        let (page, total) = store.list_ideas("alice", 2, 0).await;
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].content.persona, "third");
        assert_eq!(page[1].content.persona, "second");

        let (page, total) = store.list_ideas("alice", 2, 2).await;
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].content.persona, "first");
    }

    #[tokio::test]
    async fn test_delete_requires_owner() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path()).await.unwrap();
        let id = store.insert_idea(Idea::new("alice", content("x"))).await.unwrap();

        assert!(!store.delete_idea(id, "bob").await.unwrap());
        assert!(store.delete_idea(id, "alice").await.unwrap());
        assert!(!store.delete_idea(id, "alice").await.unwrap());
        assert_eq!(store.idea_count().await, 0);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_ideas_unchanged() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path()).await.unwrap();
        let kept = store.insert_idea(Idea::new("alice", content("kept"))).await.unwrap();

        // A directory in place of ideas.json makes every flush fail
        std::fs::remove_file(temp.path().join(IDEAS_FILE)).unwrap();
        std::fs::create_dir(temp.path().join(IDEAS_FILE)).unwrap();

        assert!(store.insert_idea(Idea::new("alice", content("lost"))).await.is_err());
        let (page, total) = store.list_ideas("alice", 10, 0).await;
        assert_eq!(total, 1);
        assert_eq!(page[0].id, kept);

        assert!(store.delete_idea(kept, "alice").await.is_err());
        assert_eq!(store.list_ideas("alice", 10, 0).await.1, 1);
        assert_eq!(store.idea_count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_reseed_is_invisible_to_concurrent_fetches() {
        let temp = TempDir::new().unwrap();
        let store = std::sync::Arc::new(Store::open(temp.path()).await.unwrap());
        let pool: Vec<GenerationElement> = (0..200)
            .map(|i| GenerationElement::new(ElementType::Persona, format!("persona {}", i)))
            .collect();
        store.replace_elements(&pool).await.unwrap();

        let writer = {
            let store = std::sync::Arc::clone(&store);
            let pool = pool.clone();
            tokio::spawn(async move {
                for _ in 0..30 {
                    store.replace_elements(&pool).await.unwrap();
                }
            })
        };

        for _ in 0..300 {
            let fetched = store.fetch_active(ElementType::Persona).await.unwrap();
            assert_eq!(fetched.len(), pool.len());
        }
        writer.await.unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(temp.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
