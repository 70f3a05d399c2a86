//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::auth::BasicAuth;
use crate::evaluation::PromptEvaluator;
use gallery_curl::{BindingMap, ParseError};
use gallery_llm::ToolBuilder;
use gallery_repository::{PromptStore, PromptUpdate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PromptStore>,
    pub evaluator: Arc<dyn PromptEvaluator>,
    pub tool_builder: Arc<ToolBuilder>,
    /// `None` leaves `/prompt/*` open
    pub auth: Option<Arc<BasicAuth>>,
    /// Minimum evaluation score (percent) for new prompts
    pub min_accuracy: f64,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct ActionTemplateQuery {
    #[serde(default)]
    pub action_name: Option<String>,
}

/// Binding map as sent by clients: a JSON-encoded string or an inline object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DynamicMap {
    Encoded(String),
    Map(BindingMap),
}

impl DynamicMap {
    pub fn into_bindings(self) -> Result<BindingMap, ParseError> {
        match self {
            DynamicMap::Encoded(raw) => BindingMap::from_json_str(&raw),
            DynamicMap::Map(map) => Ok(map),
        }
    }
}

/// cURL to function request
#[derive(Debug, Deserialize)]
pub struct CurlToolRequest {
    pub curl_command: String,
    #[serde(default)]
    pub dynamic_map: Option<DynamicMap>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurlToolResponse {
    pub python_code: String,
}

/// Build-tool request; omit `uu_id` to start a new session
#[derive(Debug, Deserialize)]
pub struct BuildToolRequest {
    pub user_prompt: String,
    #[serde(default)]
    pub uu_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptsQuery {
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddComponentRequest {
    pub prompt_component: String,
}

/// Partial prompt update; blank fields are ignored
#[derive(Debug, Deserialize)]
pub struct UpdatePromptRequest {
    pub prompt_id: String,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub agent_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub use_case: Option<String>,
}

impl UpdatePromptRequest {
    /// Field changes, without the evaluation score
    pub fn to_update(&self) -> PromptUpdate {
        fn present(value: &Option<String>) -> Option<String> {
            value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
        }

        PromptUpdate {
            prompt: present(&self.prompt),
            prompt_accuracy: None,
            service_type: present(&self.service_type),
            agent_type: present(&self.agent_type),
            language: present(&self.language),
            use_case: present(&self.use_case),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateComponentRequest {
    pub prompt_component_id: String,
    pub prompt_component: String,
}
