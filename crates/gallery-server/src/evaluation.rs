//! Prompt quality scoring through the external evaluation service

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

/// Evaluation failures
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Prompt evaluation service is not configured")]
    NotConfigured,

    #[error("Evaluation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Evaluation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid evaluation response: {0}")]
    InvalidResponse(String),
}

/// Score assigned to a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptEvaluation {
    pub prompt: String,
    /// Percent, 0 when the service reported no score
    pub accuracy: f64,
}

/// Scores prompt text
#[async_trait]
pub trait PromptEvaluator: Send + Sync {
    async fn evaluate(&self, prompt: &str) -> Result<PromptEvaluation, EvaluationError>;
}

#[derive(Deserialize)]
struct EvaluationResponse {
    output_text: Option<String>,
}

/// Client for the HTTP evaluation endpoint
pub struct HttpPromptEvaluator {
    url: Option<String>,
    client: Client,
}

impl HttpPromptEvaluator {
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, EvaluationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.filter(|u| !u.trim().is_empty()),
            client,
        })
    }
}

#[async_trait]
impl PromptEvaluator for HttpPromptEvaluator {
    async fn evaluate(&self, prompt: &str) -> Result<PromptEvaluation, EvaluationError> {
        let url = self.url.as_deref().ok_or(EvaluationError::NotConfigured)?;

        let resp = self
            .client
            .post(url)
            .json(&json!({
                "evaluate_target": "assistant",
                "input_text": prompt,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Prompt evaluation failed");
            return Err(EvaluationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: EvaluationResponse = resp
            .json()
            .await
            .map_err(|e| EvaluationError::InvalidResponse(e.to_string()))?;
        let output_text = body
            .output_text
            .ok_or_else(|| EvaluationError::InvalidResponse("missing output_text".to_string()))?;

        let accuracy = extract_accuracy(&output_text);
        tracing::info!(accuracy, "Prompt evaluated");

        Ok(PromptEvaluation {
            prompt: prompt.to_string(),
            accuracy,
        })
    }
}

fn accuracy_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+\.\d+)%").expect("accuracy pattern is valid"))
}

/// First `<digits>.<digits>%` in `text`, or 0
pub fn extract_accuracy(text: &str) -> f64 {
    accuracy_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_accuracy() {
        assert_eq!(extract_accuracy("Overall accuracy: 85.50% on 20 cases"), 85.5);
        assert_eq!(extract_accuracy("scores 12.5% then 99.9%"), 12.5);
        assert_eq!(extract_accuracy("accuracy 85%"), 0.0);
        assert_eq!(extract_accuracy(""), 0.0);
    }

    #[tokio::test]
    async fn test_evaluate_posts_prompt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/evaluate")
            .match_body(mockito::Matcher::Json(json!({
                "evaluate_target": "assistant",
                "input_text": "Be helpful."
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"output_text": "The assistant achieved 91.25% accuracy."}"#)
            .create_async()
            .await;

        let evaluator = HttpPromptEvaluator::new(
            Some(format!("{}/evaluate", server.url())),
            Duration::from_secs(5),
        )
        .unwrap();
        let evaluation = evaluator.evaluate("Be helpful.").await.unwrap();

        mock.assert_async().await;
        assert_eq!(evaluation.accuracy, 91.25);
        assert_eq!(evaluation.prompt, "Be helpful.");
    }

    #[tokio::test]
    async fn test_evaluate_without_score_is_zero() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"output_text": "could not evaluate"}"#)
            .create_async()
            .await;

        let evaluator =
            HttpPromptEvaluator::new(Some(server.url()), Duration::from_secs(5)).unwrap();
        assert_eq!(evaluator.evaluate("x").await.unwrap().accuracy, 0.0);
    }

    #[tokio::test]
    async fn test_evaluate_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(503)
            .with_body("unavailable")
            .create_async()
            .await;

        let evaluator =
            HttpPromptEvaluator::new(Some(server.url()), Duration::from_secs(5)).unwrap();
        let err = evaluator.evaluate("x").await.unwrap_err();
        assert!(matches!(err, EvaluationError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_evaluate_missing_output_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"result": "ok"}"#)
            .create_async()
            .await;

        let evaluator =
            HttpPromptEvaluator::new(Some(server.url()), Duration::from_secs(5)).unwrap();
        let err = evaluator.evaluate("x").await.unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_evaluator() {
        let evaluator = HttpPromptEvaluator::new(None, Duration::from_secs(5)).unwrap();
        let err = evaluator.evaluate("x").await.unwrap_err();
        assert!(matches!(err, EvaluationError::NotConfigured));
    }
}
