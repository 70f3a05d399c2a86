//! File system based prompt store

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::library::{Library, LibrarySnapshot};
use crate::models::{NewPrompt, Prompt, PromptComponent, PromptQuery, PromptUpdate};
use crate::traits::PromptStore;
use crate::RepositoryResult;

/// Prompt store persisted as a single JSON file
///
/// The file is read once when the store is opened and rewritten after every
/// successful mutation. A missing file is treated as an empty library.
pub struct FileSystemPromptStore {
    path: PathBuf,
    library: RwLock<Library>,
}

impl FileSystemPromptStore {
    /// Open (or start) the library stored at `path`
    ///
    /// # Example
    /// ```no_run
    /// use gallery_repository::FileSystemPromptStore;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> gallery_repository::RepositoryResult<()> {
    /// let store = FileSystemPromptStore::open("data/prompt_library.json").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();

        if path.is_dir() {
            return Err(RepositoryError::InvalidPath { path });
        }

        let library = match fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Library::default(),
            Ok(content) => {
                let snapshot: LibrarySnapshot = serde_json::from_str(&content)?;
                Library::from_snapshot(snapshot)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Library::default(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            entries = library.len(),
            "Opened prompt library"
        );

        Ok(Self {
            path,
            library: RwLock::new(library),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the library through a temporary sibling, then rename over the target
    async fn persist(&self, library: &Library) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&library.snapshot())?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            entries = library.len(),
            "Persisted prompt library"
        );
        Ok(())
    }
}

#[async_trait]
impl PromptStore for FileSystemPromptStore {
    async fn list_components(&self) -> RepositoryResult<Vec<PromptComponent>> {
        Ok(self.library.read().await.components())
    }

    async fn find_prompts(&self, query: &PromptQuery) -> RepositoryResult<Vec<Prompt>> {
        self.library.read().await.find_prompts(query)
    }

    async fn service_types(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.library.read().await.service_types())
    }

    async fn languages(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.library.read().await.languages())
    }

    async fn insert_prompt(&self, prompt: NewPrompt, accuracy: f64) -> RepositoryResult<Prompt> {
        let mut library = self.library.write().await;
        let inserted = library.insert_prompt(prompt, accuracy);
        self.persist(&library).await?;
        Ok(inserted)
    }

    async fn insert_component(
        &self,
        component: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent> {
        let mut library = self.library.write().await;
        let inserted = library.insert_component(component, accuracy);
        self.persist(&library).await?;
        Ok(inserted)
    }

    async fn update_prompt(&self, id: &str, update: PromptUpdate) -> RepositoryResult<Prompt> {
        let mut library = self.library.write().await;
        let updated = library.update_prompt(id, update)?;
        self.persist(&library).await?;
        Ok(updated)
    }

    async fn update_component(
        &self,
        id: &str,
        component: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent> {
        let mut library = self.library.write().await;
        let updated = library.update_component(id, component, accuracy)?;
        self.persist(&library).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut library = self.library.write().await;
        library.delete(id)?;
        self.persist(&library).await
    }
}
