//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Request/response type definitions and shared state
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for request types

mod extractors;
mod handlers;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{
    AddComponentRequest, AppState, BuildToolRequest, CurlToolRequest, CurlToolResponse,
    DynamicMap, HealthResponse, PromptsQuery, UpdateComponentRequest, UpdatePromptRequest,
};
