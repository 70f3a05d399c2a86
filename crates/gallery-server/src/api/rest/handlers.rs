//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::actions::{self, Action, ActionTemplate};
use crate::error::ServerError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gallery_curl::{generate_function_code, BindingMap};
use gallery_llm::ToolBuildResult;
use gallery_repository::{
    is_valid_id, NewPrompt, Prompt, PromptComponent, PromptQuery, RepositoryError,
};
use serde_json::{json, Value};
use tracing::{info, warn};

const INVALID_PROMPT_ID: &str = "Invalid prompt ID";

/// Welcome endpoint
pub(super) async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Hello!" }))
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub(super) async fn available_actions() -> Json<Vec<&'static str>> {
    Json(actions::available_actions())
}

pub(super) async fn action_template(Query(query): Query<ActionTemplateQuery>) -> Response {
    match query.action_name.as_deref().and_then(Action::from_name) {
        Some(action) => Json(ActionTemplate::from(action)).into_response(),
        None => Json(json!({ "message": "pass valid action name" })).into_response(),
    }
}

/// Convert a curl command into a Python function
pub(super) async fn tool_from_curl(
    JsonExtractor(payload): JsonExtractor<CurlToolRequest>,
) -> Result<Json<CurlToolResponse>, ServerError> {
    let bindings = match payload.dynamic_map {
        Some(map) => map.into_bindings()?,
        None => BindingMap::default(),
    };

    info!(
        "Generating function from curl command ({} bound params, {} bound headers, {} bound fields)",
        bindings.params.len(),
        bindings.headers.len(),
        bindings.json.len()
    );

    let python_code = generate_function_code(&payload.curl_command, &bindings)?;
    Ok(Json(CurlToolResponse { python_code }))
}

/// Generate a function from a natural-language description
pub(super) async fn build_tool(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<BuildToolRequest>,
) -> Result<Json<ToolBuildResult>, ServerError> {
    info!(
        "Received build-tool request, continuing session: {}",
        payload.uu_id.is_some()
    );

    let result = state
        .tool_builder
        .build(&payload.user_prompt, payload.uu_id)
        .await?;

    Ok(Json(result))
}

pub(super) async fn prompt_components(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptComponent>>, ServerError> {
    Ok(Json(state.store.list_components().await?))
}

pub(super) async fn service_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ServerError> {
    Ok(Json(state.store.service_types().await?))
}

pub(super) async fn prompt_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ServerError> {
    Ok(Json(state.store.languages().await?))
}

/// Prompts filtered by service type and optional language
pub(super) async fn prompts(
    State(state): State<AppState>,
    Query(params): Query<PromptsQuery>,
) -> Result<Json<Vec<Prompt>>, ServerError> {
    let service_type = params
        .service_type
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("service_type is required".to_string()))?;

    let mut query = PromptQuery::new(service_type);
    if let Some(language) = params.language {
        query = query.with_language(language);
    }

    let prompts = state.store.find_prompts(&query).await?;
    info!("Found {} prompts for service type {}", prompts.len(), query.service_type);
    Ok(Json(prompts))
}

/// Score a new prompt and store it when it clears the threshold
pub(super) async fn add_prompt(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<NewPrompt>,
) -> Result<Json<Value>, ServerError> {
    let evaluation = state.evaluator.evaluate(&payload.prompt).await?;

    if evaluation.accuracy < state.min_accuracy {
        info!(
            "Prompt rejected with accuracy {:.2}% (minimum {}%)",
            evaluation.accuracy, state.min_accuracy
        );
        return Ok(Json(Value::String(format!(
            "Prompt should score more than {}% accuracy to get inserted!",
            state.min_accuracy
        ))));
    }

    let prompt = state.store.insert_prompt(payload, evaluation.accuracy).await?;
    info!("Inserted prompt {}", prompt.prompt_id);

    Ok(Json(json!({
        "status": "Success",
        "prompt_id": prompt.prompt_id,
    })))
}

pub(super) async fn add_prompt_component(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<AddComponentRequest>,
) -> Result<Json<Value>, ServerError> {
    let evaluation = state.evaluator.evaluate(&payload.prompt_component).await?;
    let component = state
        .store
        .insert_component(payload.prompt_component, evaluation.accuracy)
        .await?;
    info!("Inserted prompt component {}", component.prompt_component_id);

    Ok(Json(json!({
        "status": "Success",
        "prompt_component_id": component.prompt_component_id,
    })))
}

/// Partially update a prompt, re-scoring it when its text changes
pub(super) async fn update_prompt(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<UpdatePromptRequest>,
) -> Result<Response, ServerError> {
    if !is_valid_id(&payload.prompt_id) {
        return Ok(invalid_id());
    }

    let mut update = payload.to_update();
    if let Some(text) = update.prompt.as_deref() {
        update.prompt_accuracy = Some(state.evaluator.evaluate(text).await?.accuracy);
    }

    match state.store.update_prompt(&payload.prompt_id, update).await {
        Ok(prompt) => {
            info!("Updated prompt {}", prompt.prompt_id);
            Ok(Json(json!({
                "prompt_id": prompt.prompt_id,
                "status": "Success",
            }))
            .into_response())
        }
        Err(RepositoryError::NotFound { .. }) => {
            warn!("Prompt {} not found for update", payload.prompt_id);
            Ok(failed("prompt_id", &payload.prompt_id, None))
        }
        Err(e) => Err(e.into()),
    }
}

/// Replace a prompt component's text and score
pub(super) async fn update_prompt_component(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<UpdateComponentRequest>,
) -> Result<Response, ServerError> {
    if !is_valid_id(&payload.prompt_component_id) {
        return Ok(invalid_id());
    }

    let evaluation = state.evaluator.evaluate(&payload.prompt_component).await?;

    match state
        .store
        .update_component(
            &payload.prompt_component_id,
            payload.prompt_component,
            evaluation.accuracy,
        )
        .await
    {
        Ok(component) => {
            info!("Updated prompt component {}", component.prompt_component_id);
            Ok(Json(json!({
                "prompt_component_id": component.prompt_component_id,
                "status": "Success",
            }))
            .into_response())
        }
        Err(RepositoryError::NotFound { .. }) => {
            warn!(
                "Prompt component {} not found for update",
                payload.prompt_component_id
            );
            Ok(failed(
                "prompt_component_id",
                &payload.prompt_component_id,
                None,
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a prompt or prompt component by id
pub(super) async fn delete_prompt(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> Result<Response, ServerError> {
    if !is_valid_id(&prompt_id) {
        return Ok(invalid_id());
    }

    match state.store.delete(&prompt_id).await {
        Ok(()) => {
            info!("Deleted {}", prompt_id);
            Ok(Json(json!({ "status": "Success" })).into_response())
        }
        Err(RepositoryError::NotFound { .. }) => {
            let content = format!("No prompt or prompt component found with id: {}", prompt_id);
            Ok(failed("prompt_id", &prompt_id, Some(content)))
        }
        Err(e) => Err(e.into()),
    }
}

fn invalid_id() -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(INVALID_PROMPT_ID)).into_response()
}

fn failed(key: &str, id: &str, content: Option<String>) -> Response {
    let mut body = json!({ key: id, "status": "Failed" });
    if let Some(content) = content {
        body["content"] = Value::String(content);
    }
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
