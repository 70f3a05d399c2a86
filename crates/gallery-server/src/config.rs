//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage backend for the prompt library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Process memory, lost on restart
    Memory,
    /// Single JSON file on disk
    File {
        #[serde(default = "default_store_path")]
        path: PathBuf,
    },
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/prompt_library.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File {
            path: default_store_path(),
        }
    }
}

/// HTTP Basic credentials guarding `/prompt/*`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Prompt evaluation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Endpoint receiving `{"evaluate_target", "input_text"}`
    pub url: Option<String>,
    pub timeout_secs: u64,
    /// Minimum score (percent) a new prompt needs to be stored
    pub min_accuracy: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
            min_accuracy: 70.0,
        }
    }
}

/// LLM backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderKind {
    OpenAI,
    Mock,
}

/// LLM used by the build-tool endpoint
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderKind::OpenAI,
            api_key: None,
            base_url: None,
            model: "gpt-4o".to_string(),
            temperature: Some(0.0),
            max_tokens: None,
            timeout_secs: 60,
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,

    /// Basic auth for `/prompt/*`; open when unset
    pub auth: Option<AuthConfig>,

    pub evaluator: EvaluatorConfig,

    pub llm: LlmConfig,

    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            auth: None,
            evaluator: EvaluatorConfig::default(),
            llm: LlmConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones winning: built-in defaults, `config/server.*`,
    /// `GALLERY_*` variables. `OPENAI_API_KEY` and `PROMPT_EVALUATOR_URL`
    /// fill in the matching settings when nothing else set them.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix("GALLERY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build();

        let config = match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?,
            Err(e) => {
                tracing::info!("No usable config sources ({}), using default configuration", e);
                Self::default()
            }
        };

        Ok(config.with_legacy_env())
    }

    fn with_legacy_env(mut self) -> Self {
        if self.llm.api_key.is_none() {
            self.llm.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if self.evaluator.url.is_none() {
            self.evaluator.url = std::env::var("PROMPT_EVALUATOR_URL").ok();
        }
        self
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert!(config.auth.is_none());
        assert_eq!(config.evaluator.min_accuracy, 70.0);
        assert_eq!(config.llm.provider, LlmProviderKind::OpenAI);
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_store_config_default() {
        if let StoreConfig::File { path } = StoreConfig::default() {
            assert_eq!(path, PathBuf::from("data/prompt_library.json"));
        } else {
            panic!("Expected File store");
        }
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "port": 9000,
            "auth": {"username": "u", "password": "p"},
            "evaluator": {"url": "http://eval"},
            "llm": {"provider": "mock"},
            "store": {"type": "memory"}
        }))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.evaluator.url.as_deref(), Some("http://eval"));
        assert_eq!(config.evaluator.timeout_secs, 30);
        assert_eq!(config.llm.provider, LlmProviderKind::Mock);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn test_file_store_default_path() {
        let store: StoreConfig = serde_json::from_value(serde_json::json!({"type": "file"})).unwrap();
        assert_eq!(store, StoreConfig::default());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut config = ServerConfig::default();
        config.auth = Some(AuthConfig {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        });
        config.llm.api_key = Some("sk-secret".to_string());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("admin"));
        assert!(!debug_str.contains("hunter2"));
        assert!(!debug_str.contains("sk-secret"));
    }
}
