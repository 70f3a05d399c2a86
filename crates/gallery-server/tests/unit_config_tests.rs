//! Unit tests for ServerConfig and StoreConfig

use gallery_server::config::{AuthConfig, LlmProviderKind, ServerConfig, StoreConfig};
use std::path::PathBuf;

fn from_toml(toml: &str) -> ServerConfig {
    config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_default_config() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8000);
    assert!(config.auth.is_none());
    assert_eq!(config.evaluator.min_accuracy, 70.0);
    assert_eq!(config.llm.provider, LlmProviderKind::OpenAI);
    assert_eq!(config.llm.model, "gpt-4o");
    assert_eq!(
        config.store,
        StoreConfig::File {
            path: PathBuf::from("data/prompt_library.json")
        }
    );
    assert_eq!(config.bind_address(), "127.0.0.1:8000");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = from_toml(
        r#"
port = 9000

[evaluator]
url = "http://localhost:5000/evaluate"
"#,
    );

    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(
        config.evaluator.url.as_deref(),
        Some("http://localhost:5000/evaluate")
    );
    assert_eq!(config.evaluator.timeout_secs, 30);
    assert_eq!(config.evaluator.min_accuracy, 70.0);
}

#[test]
fn test_full_toml() {
    let config = from_toml(
        r#"
host = "0.0.0.0"
port = 8080
log_level = "debug"

[auth]
username = "admin"
password = "s3cret"

[evaluator]
min_accuracy = 80.0

[llm]
provider = "mock"
model = "gpt-4o-mini"

[store]
type = "memory"
"#,
    );

    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(
        config.auth,
        Some(AuthConfig {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        })
    );
    assert_eq!(config.evaluator.min_accuracy, 80.0);
    assert_eq!(config.llm.provider, LlmProviderKind::Mock);
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.store, StoreConfig::Memory);
}

#[test]
fn test_file_store_default_path() {
    let config = from_toml(
        r#"
[store]
type = "file"
"#,
    );
    assert_eq!(
        config.store,
        StoreConfig::File {
            path: PathBuf::from("data/prompt_library.json")
        }
    );
}

#[test]
fn test_debug_hides_secrets() {
    let mut config = ServerConfig::default();
    config.auth = Some(AuthConfig {
        username: "admin".to_string(),
        password: "hunter2".to_string(),
    });
    config.llm.api_key = Some("sk-secret".to_string());

    let debug = format!("{:?}", config);
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
    assert!(!debug.contains("sk-secret"));
}
