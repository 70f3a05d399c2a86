//! Application state initialization
//!
//! Builds the collaborators behind the REST API from server configuration.

use crate::api::AppState;
use crate::auth::BasicAuth;
use crate::config::{LlmConfig, LlmProviderKind, ServerConfig, StoreConfig};
use crate::evaluation::HttpPromptEvaluator;
use anyhow::Result;
use gallery_llm::{
    LLMClient, MockProvider, OpenAIProvider, SessionStore, ToolBuilder, ToolBuilderConfig,
    OPENAI_BASE_URL,
};
use gallery_repository::{FileSystemPromptStore, InMemoryPromptStore, PromptStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Initialize application state
pub async fn init_state(config: &ServerConfig) -> Result<AppState> {
    let store = init_store(&config.store).await?;

    if config.evaluator.url.is_none() {
        warn!("No evaluation service configured; adding or updating prompts will fail");
    }
    let evaluator = HttpPromptEvaluator::new(
        config.evaluator.url.clone(),
        Duration::from_secs(config.evaluator.timeout_secs),
    )?;

    let client = init_llm_client(&config.llm)?;
    let mut builder_config = ToolBuilderConfig::new(config.llm.model.clone());
    builder_config.temperature = config.llm.temperature;
    builder_config.max_tokens = config.llm.max_tokens;
    let tool_builder = ToolBuilder::new(client, Arc::new(SessionStore::new()), builder_config);

    let auth = match &config.auth {
        Some(auth) => Some(Arc::new(BasicAuth::from(auth))),
        None => {
            warn!("Basic auth is not configured; /prompt routes are open");
            None
        }
    };

    Ok(AppState {
        store,
        evaluator: Arc::new(evaluator),
        tool_builder: Arc::new(tool_builder),
        auth,
        min_accuracy: config.evaluator.min_accuracy,
    })
}

async fn init_store(config: &StoreConfig) -> Result<Arc<dyn PromptStore>> {
    match config {
        StoreConfig::Memory => {
            info!("Using in-memory prompt library");
            Ok(Arc::new(InMemoryPromptStore::new()))
        }
        StoreConfig::File { path } => {
            info!("Using prompt library file: {}", path.display());
            let store = FileSystemPromptStore::open(path).await?;
            Ok(Arc::new(store))
        }
    }
}

fn init_llm_client(config: &LlmConfig) -> Result<Arc<dyn LLMClient>> {
    match config.provider {
        LlmProviderKind::OpenAI => {
            let api_key = config.api_key.clone().unwrap_or_default();
            if api_key.is_empty() {
                warn!("No OpenAI API key configured; build-tool requests will fail");
            }
            let base_url = config
                .base_url
                .clone()
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string());
            let provider = OpenAIProvider::with_timeout(
                api_key,
                base_url,
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Arc::new(provider))
        }
        LlmProviderKind::Mock => {
            info!("Using mock LLM provider");
            Ok(Arc::new(MockProvider::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    fn memory_config() -> ServerConfig {
        ServerConfig {
            store: StoreConfig::Memory,
            llm: LlmConfig {
                provider: LlmProviderKind::Mock,
                ..LlmConfig::default()
            },
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_init_state_with_memory_store() {
        let state = init_state(&memory_config()).await.unwrap();
        assert!(state.auth.is_none());
        assert_eq!(state.min_accuracy, 70.0);
        assert!(state.store.list_components().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_init_state_with_auth() {
        let mut config = memory_config();
        config.auth = Some(AuthConfig {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        });
        let state = init_state(&config).await.unwrap();
        assert!(state.auth.is_some());
    }

    #[tokio::test]
    async fn test_init_state_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = memory_config();
        config.store = StoreConfig::File {
            path: dir.path().join("library.json"),
        };
        let state = init_state(&config).await.unwrap();
        assert!(state.store.service_types().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_init_state_rejects_directory_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = memory_config();
        config.store = StoreConfig::File {
            path: dir.path().to_path_buf(),
        };
        assert!(init_state(&config).await.is_err());
    }
}
