//! In-memory prompt store

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::library::Library;
use crate::models::{NewPrompt, Prompt, PromptComponent, PromptQuery, PromptUpdate};
use crate::traits::PromptStore;
use crate::RepositoryResult;

/// Prompt store held entirely in process memory
///
/// Contents are lost on restart. Used for tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryPromptStore {
    library: RwLock<Library>,
}

impl InMemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptStore for InMemoryPromptStore {
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
        Ok(self.library.write().await.insert_prompt(prompt, accuracy))
    }

    async fn insert_component(
        &self,
        component: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent> {
        Ok(self.library.write().await.insert_component(component, accuracy))
    }

    async fn update_prompt(&self, id: &str, update: PromptUpdate) -> RepositoryResult<Prompt> {
        self.library.write().await.update_prompt(id, update)
    }

    async fn update_component(
        &self,
        id: &str,
        component: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent> {
        self.library
            .write()
            .await
            .update_component(id, component, accuracy)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        self.library.write().await.delete(id).map(|_| ())
    }
}
