//! Custom function synthesis
//!
//! # Example
//! ```no_run
//! use gallery_llm::{OpenAIProvider, SessionStore, ToolBuilder, ToolBuilderConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> gallery_llm::Result<()> {
//! let provider = Arc::new(OpenAIProvider::new("your-api-key".to_string()));
//! let sessions = Arc::new(SessionStore::new());
//! let builder = ToolBuilder::new(provider, sessions, ToolBuilderConfig::new("gpt-4o"));
//!
//! let built = builder
//!     .build("Convert a temperature from celsius to fahrenheit", None)
//!     .await?;
//! println!("session {}: {}", built.uu_id, built.result);
//! # Ok(())
//! # }
//! ```

pub mod json_extractor;
pub mod prompt_templates;
pub mod tool_builder;

pub use json_extractor::extract_json;
pub use tool_builder::{GeneratedTool, ToolBuildResult, ToolBuilder, ToolBuilderConfig};
