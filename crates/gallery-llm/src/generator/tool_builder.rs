//! Custom function synthesis with per-session memory

use crate::client::{ChatMessage, LLMClient, LLMRequest, ResponseSchema};
use crate::error::{LLMError, Result};
use crate::generator::json_extractor::extract_json;
use crate::generator::prompt_templates::{
    generated_tool_schema, GENERATED_TOOL_SCHEMA_NAME, SYSTEM_MESSAGE,
};
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Configuration for tool building
#[derive(Debug, Clone)]
pub struct ToolBuilderConfig {
    /// Model to use for generation
    pub model: String,
    /// Maximum tokens for response
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 1.0, lower = more deterministic)
    pub temperature: Option<f32>,
    /// Ask the provider for schema-constrained output
    pub structured_output: bool,
}

impl Default for ToolBuilderConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: None,
            temperature: Some(0.0),
            structured_output: true,
        }
    }
}

impl ToolBuilderConfig {
    /// Create a new configuration with a specific model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_structured_output(mut self, enable: bool) -> Self {
        self.structured_output = enable;
        self
    }
}

/// A synthesized function with its descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedTool {
    pub python_function: String,
    pub function_description: String,
    /// JSON string mapping parameter names to descriptions
    pub params_description: String,
}

/// Outcome of one build-tool turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolBuildResult {
    /// The generated tool serialized as a JSON string
    pub result: String,
    /// Session id to pass on the next turn
    pub uu_id: String,
    #[serde(skip)]
    pub tool: Option<GeneratedTool>,
}

/// Generates custom functions from natural language, remembering each session
pub struct ToolBuilder {
    client: Arc<dyn LLMClient>,
    sessions: Arc<SessionStore>,
    config: ToolBuilderConfig,
}

impl ToolBuilder {
    /// Create a new tool builder
    pub fn new(
        client: Arc<dyn LLMClient>,
        sessions: Arc<SessionStore>,
        config: ToolBuilderConfig,
    ) -> Self {
        Self {
            client,
            sessions,
            config,
        }
    }

    /// Create with default configuration and a private session store
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self::new(
            client,
            Arc::new(SessionStore::new()),
            ToolBuilderConfig::default(),
        )
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Run one turn of the build-tool conversation
    ///
    /// Without a session id a new one is minted and the conversation opens
    /// with the system instruction. With an id the stored history is
    /// continued as is. History is only extended when the reply parses.
    ///
    /// # Example
    /// ```no_run
    /// use gallery_llm::{MockProvider, ToolBuilder};
    /// use std::sync::Arc;
    ///
    /// # async fn example() -> gallery_llm::Result<()> {
    /// let builder = ToolBuilder::with_defaults(Arc::new(MockProvider::new()));
    ///
    /// let first = builder.build("Add two numbers", None).await?;
    /// let second = builder
    ///     .build("Also accept floats", Some(first.uu_id.clone()))
    ///     .await?;
    /// assert_eq!(first.uu_id, second.uu_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(
        &self,
        user_prompt: &str,
        session_id: Option<String>,
    ) -> Result<ToolBuildResult> {
        if user_prompt.trim().is_empty() {
            return Err(LLMError::InvalidRequest(
                "user_prompt must not be empty".to_string(),
            ));
        }

        let (session_id, mut turn) = match session_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => (id, Vec::new()),
            None => (
                Uuid::new_v4().to_string(),
                vec![ChatMessage::system(SYSTEM_MESSAGE)],
            ),
        };
        turn.push(ChatMessage::user(user_prompt));

        let mut messages = self.sessions.history(&session_id);
        messages.extend(turn.iter().cloned());

        let mut request = LLMRequest::new(messages, self.config.model.clone());
        request.max_tokens = self.config.max_tokens;
        request.temperature = self.config.temperature;
        if self.config.structured_output {
            request = request.with_response_schema(ResponseSchema {
                name: GENERATED_TOOL_SCHEMA_NAME.to_string(),
                schema: generated_tool_schema(),
            });
        }

        tracing::info!(
            session_id = %session_id,
            history = request.messages.len(),
            first_turn = request.has_system(),
            "Building custom tool"
        );

        let response = self.client.call(request).await?;

        let json = extract_json(&response.content)?;
        let tool: GeneratedTool = serde_json::from_str(&json).map_err(|e| {
            LLMError::InvalidResponse(format!("Reply is not a generated tool: {}", e))
        })?;
        let result = serde_json::to_string(&tool)?;

        turn.push(ChatMessage::assistant(result.clone()));
        self.sessions.append(&session_id, turn);

        Ok(ToolBuildResult {
            result,
            uu_id: session_id,
            tool: Some(tool),
        })
    }
}
