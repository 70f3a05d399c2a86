//! OpenAI chat completions provider

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use crate::provider::LLMProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Default OpenAI API endpoint
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI provider
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENAI_BASE_URL.to_string())
    }

    /// Create with custom base URL (e.g., an OpenAI-compatible gateway)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create with a request timeout
    pub fn with_timeout(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::InvalidConfiguration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn request_body(request: &LLMRequest) -> Value {
        let mut body = json!({
            "model": request.model,
            "messages": request.messages,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(schema) = &request.response_schema {
            body["response_format"] = json!({
                "type": "json_schema",
                "json_schema": {
                    "name": schema.name,
                    "schema": schema.schema,
                    "strict": true
                }
            });
        }

        body
    }
}

#[async_trait]
impl LLMClient for OpenAIProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        if self.api_key.is_empty() {
            return Err(LLMError::InvalidConfiguration(
                "OpenAI API key is not set".to_string(),
            ));
        }

        let body = Self::request_body(&request);

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Calling OpenAI chat completions"
        );

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("OpenAI API call failed: {}", e)))?;

        let status = resp.status();
        let resp_text = resp
            .text()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LLMError::ApiCallFailed(format!(
                "OpenAI API error ({}): {}",
                status, resp_text
            )));
        }

        let resp_json: Value = serde_json::from_str(&resp_text)
            .map_err(|e| LLMError::ApiCallFailed(format!("Failed to parse response: {}", e)))?;

        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| LLMError::InvalidResponse("No content in response".to_string()))?
            .to_string();

        let finish_reason = resp_json["choices"][0]["finish_reason"]
            .as_str()
            .unwrap_or("stop")
            .to_string();

        let tokens_used = resp_json["usage"]["total_tokens"].as_u64().unwrap_or(0) as u32;

        Ok(LLMResponse::new(content, request.model)
            .with_tokens(tokens_used)
            .with_finish_reason(finish_reason))
    }

    fn name(&self) -> &str {
        "openai"
    }
}

impl LLMProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ChatMessage, ResponseSchema};

    fn sample_request() -> LLMRequest {
        LLMRequest::new(
            vec![ChatMessage::system("sys"), ChatMessage::user("hello")],
            "gpt-4o",
        )
        .with_temperature(0.0)
    }

    #[test]
    fn test_openai_provider_creation() {
        let provider = OpenAIProvider::new("test-key".to_string());
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.provider_name(), "OpenAI");
        assert_eq!(provider.base_url, OPENAI_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider =
            OpenAIProvider::with_base_url("k".to_string(), "http://localhost:1234/v1/".to_string());
        assert_eq!(provider.base_url, "http://localhost:1234/v1");
    }

    #[test]
    fn test_request_body_with_schema() {
        let request = sample_request().with_response_schema(ResponseSchema {
            name: "tool".to_string(),
            schema: json!({"type": "object"}),
        });

        let body = OpenAIProvider::request_body(&request);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
        assert_eq!(body["temperature"], json!(0.0));
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], "tool");
        assert!(body.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_call_parses_completion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"content":"hi there"},"finish_reason":"stop"}],"usage":{"total_tokens":42}}"#,
            )
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url("test-key".to_string(), server.url());
        let response = provider.call(sample_request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "hi there");
        assert_eq!(response.tokens_used, 42);
        assert_eq!(response.model, "gpt-4o");
    }

    #[tokio::test]
    async fn test_call_reports_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":"bad key"}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url("test-key".to_string(), server.url());
        let err = provider.call(sample_request()).await.unwrap_err();

        assert!(matches!(err, LLMError::ApiCallFailed(msg) if msg.contains("401")));
    }

    #[tokio::test]
    async fn test_call_without_content_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url("test-key".to_string(), server.url());
        let err = provider.call(sample_request()).await.unwrap_err();

        assert!(matches!(err, LLMError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let provider = OpenAIProvider::new(String::new());
        let err = provider.call(sample_request()).await.unwrap_err();
        assert!(matches!(err, LLMError::InvalidConfiguration(_)));
    }
}
