//! Prompt library storage for the Prompt Gallery backend
//!
//! Holds two kinds of records in one id space:
//!
//! - **Prompts**: complete prompts categorized by service type, use case,
//!   agent type and language
//! - **Prompt components**: reusable fragments
//!
//! Every record carries the accuracy score it received from the evaluation
//! service when it was written.
//!
//! # Backends
//!
//! - [`InMemoryPromptStore`]: process memory, for tests and development
//! - [`FileSystemPromptStore`]: a single JSON file on disk

pub mod error;
pub mod file_system;
mod library;
pub mod memory;
pub mod models;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use file_system::FileSystemPromptStore;
pub use library::is_valid_id;
pub use memory::InMemoryPromptStore;
pub use models::{
    capitalize, ComponentType, NewPrompt, Prompt, PromptComponent, PromptQuery, PromptUpdate,
};
pub use traits::PromptStore;
