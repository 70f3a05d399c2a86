//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use crate::auth::require_basic_auth;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    let actions = Router::new()
        .route("/available-actions", get(available_actions))
        .route("/action-template", get(action_template))
        .route("/tool-from-curl", post(tool_from_curl))
        .route("/build-tool", post(build_tool));

    let library = Router::new()
        .route("/prompt-components", get(prompt_components))
        .route("/get-service-types", get(service_types))
        .route("/get-prompt-languages", get(prompt_languages))
        .route("/prompts", get(prompts))
        .route("/prompts/add-prompt", post(add_prompt))
        .route("/prompts/add-prompt-component", post(add_prompt_component))
        .route("/prompts/update-prompt", post(update_prompt))
        .route("/prompts/update-prompt-component", post(update_prompt_component))
        // Misspelled path kept for existing clients
        .route("/prompts/update-prompt-conponent", post(update_prompt_component))
        .route("/prompts/delete-prompt/:prompt_id", delete(delete_prompt));

    let protected = Router::new()
        .nest("/actions", actions)
        .nest("/prompt-library", library)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .nest("/prompt", protected)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
