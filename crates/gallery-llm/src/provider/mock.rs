//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use crate::provider::LLMProvider;
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Mock LLM provider for testing
///
/// Replies are served from a queue first, then from the default response.
/// Every request is recorded so callers can inspect the conversation sent.
pub struct MockProvider {
    name: String,
    default_response: String,
    queued: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<LLMRequest>>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_response("Mock LLM response".to_string())
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self {
            name: "mock".to_string(),
            default_response: response,
            queued: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a reply for the next call
    pub async fn push_response(&self, response: impl Into<String>) {
        self.queued.lock().await.push_back(Ok(response.into()));
    }

    /// Queue a failure for the next call
    pub async fn push_error(&self, message: impl Into<String>) {
        self.queued
            .lock()
            .await
            .push_back(Err(LLMError::ApiCallFailed(message.into())));
    }

    /// Requests received so far, oldest first
    pub async fn requests(&self) -> Vec<LLMRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let model = request.model.clone();
        self.requests.lock().await.push(request);

        let content = match self.queued.lock().await.pop_front() {
            Some(reply) => reply?,
            None => self.default_response.clone(),
        };

        Ok(LLMResponse::new(content, model)
            .with_tokens(10)
            .with_finish_reason("stop".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl LLMProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "Mock"
    }
}
