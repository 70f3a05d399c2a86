//! Core trait definitions for prompt storage
//!
//! # Example
//!
//! ```no_run
//! use gallery_repository::{InMemoryPromptStore, NewPrompt, PromptQuery, PromptStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryPromptStore::new();
//!
//! store
//!     .insert_prompt(
//!         NewPrompt {
//!             service_type: "banking".to_string(),
//!             prompt: "You are a helpful banking assistant.".to_string(),
//!             agent_type: "voice".to_string(),
//!             use_case: "card blocking".to_string(),
//!             language: "english".to_string(),
//!         },
//!         82.5,
//!     )
//!     .await?;
//!
//! let prompts = store.find_prompts(&PromptQuery::new("bank")).await?;
//! assert_eq!(prompts.len(), 1);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::models::{NewPrompt, Prompt, PromptComponent, PromptQuery, PromptUpdate};
use crate::RepositoryResult;

/// Storage for the prompt library
///
/// Prompts and prompt components share one id space, so [`delete`] accepts
/// either kind. All implementations must be `Send + Sync` for use across
/// async tasks.
///
/// [`delete`]: PromptStore::delete
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// All prompt components, in insertion order
    async fn list_components(&self) -> RepositoryResult<Vec<PromptComponent>>;

    /// Prompts matching `query`, in insertion order
    async fn find_prompts(&self, query: &PromptQuery) -> RepositoryResult<Vec<Prompt>>;

    /// Distinct service types across prompts, sorted
    async fn service_types(&self) -> RepositoryResult<Vec<String>>;

    /// Distinct languages across prompts, sorted
    async fn languages(&self) -> RepositoryResult<Vec<String>>;

    /// Store a new prompt with its evaluation score
    ///
    /// `service_type`, `use_case` and `language` are capitalized on the way in.
    async fn insert_prompt(&self, prompt: NewPrompt, accuracy: f64) -> RepositoryResult<Prompt>;

    /// Store a new prompt component with its evaluation score
    async fn insert_component(
        &self,
        component: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent>;

    /// Apply a partial update to a prompt
    async fn update_prompt(&self, id: &str, update: PromptUpdate) -> RepositoryResult<Prompt>;

    /// Replace the text and score of a prompt component
    async fn update_component(
        &self,
        id: &str,
        component: String,
        accuracy: f64,
    ) -> RepositoryResult<PromptComponent>;

    /// Remove a prompt or prompt component
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
