//! LLM provider implementations

use crate::client::LLMClient;

/// LLM provider trait
pub trait LLMProvider: LLMClient {
    /// Get the provider name
    fn provider_name(&self) -> &str;
}

mod mock;
mod openai;

pub use mock::MockProvider;
pub use openai::{OpenAIProvider, OPENAI_BASE_URL};
