//! Gallery LLM Integration
//!
//! LLM access for the Prompt Gallery backend:
//! - a provider-neutral chat client ([`LLMClient`])
//! - an OpenAI provider and a scriptable mock
//! - the build-tool generator, which synthesizes a `customFunction` from a
//!   natural-language requirement and keeps a conversation per session

pub use client::{ChatMessage, LLMClient, LLMRequest, LLMResponse, ResponseSchema, Role};
pub use error::{LLMError, Result};
pub use session::SessionStore;

pub use provider::{LLMProvider, MockProvider, OpenAIProvider, OPENAI_BASE_URL};

pub use generator::{GeneratedTool, ToolBuildResult, ToolBuilder, ToolBuilderConfig};

pub mod client;
pub mod error;
pub mod generator;
pub mod provider;
pub mod session;
