//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use gallery_curl::BindingMap;
use serde_json::json;

#[test]
fn test_dynamic_map_from_encoded_string() {
    let request: CurlToolRequest = serde_json::from_value(json!({
        "curl_command": "curl https://api.example.com",
        "dynamic_map": "{\"params\": {\"q\": \"query\"}}"
    }))
    .unwrap();

    let bindings = request.dynamic_map.unwrap().into_bindings().unwrap();
    assert_eq!(bindings.params.get("q").map(String::as_str), Some("query"));
    assert!(bindings.headers.is_empty());
}

#[test]
fn test_dynamic_map_from_object() {
    let request: CurlToolRequest = serde_json::from_value(json!({
        "curl_command": "curl https://api.example.com",
        "dynamic_map": {"headers": {"Authorization": "token"}}
    }))
    .unwrap();

    let bindings = request.dynamic_map.unwrap().into_bindings().unwrap();
    assert_eq!(
        bindings.headers.get("Authorization").map(String::as_str),
        Some("token")
    );
}

#[test]
fn test_dynamic_map_optional() {
    let request: CurlToolRequest =
        serde_json::from_value(json!({ "curl_command": "curl https://x.io" })).unwrap();
    assert!(request.dynamic_map.is_none());
}

#[test]
fn test_blank_encoded_map_is_empty() {
    let map = DynamicMap::Encoded("  ".to_string());
    assert_eq!(map.into_bindings().unwrap(), BindingMap::default());
}

#[test]
fn test_bad_encoded_map_is_error() {
    let map = DynamicMap::Encoded("{not json".to_string());
    assert!(map.into_bindings().is_err());
}

#[test]
fn test_update_request_ignores_blank_fields() {
    let request: UpdatePromptRequest = serde_json::from_value(json!({
        "prompt_id": "id",
        "prompt": "",
        "language": "English",
        "use_case": "   "
    }))
    .unwrap();

    let update = request.to_update();
    assert_eq!(update.prompt, None);
    assert_eq!(update.language.as_deref(), Some("English"));
    assert_eq!(update.use_case, None);
    assert_eq!(update.prompt_accuracy, None);
}

#[test]
fn test_build_tool_request_without_session() {
    let request: BuildToolRequest =
        serde_json::from_value(json!({ "user_prompt": "add two numbers" })).unwrap();
    assert!(request.uu_id.is_none());
}
