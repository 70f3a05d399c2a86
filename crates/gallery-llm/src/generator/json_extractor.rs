//! JSON extraction utilities for cleaning LLM responses

use crate::error::{LLMError, Result};

/// Extracts a JSON object from an LLM response
///
/// Handles the common output patterns:
/// - a bare JSON object
/// - Markdown code blocks (```json ... ``` or ``` ... ```)
/// - explanatory text around the object
pub fn extract_json(llm_output: &str) -> Result<String> {
    let cleaned = llm_output.trim();

    if let Some(content) = extract_from_markdown(cleaned) {
        return validate_and_return(&content);
    }

    if let Some(content) = extract_outer_object(cleaned) {
        return validate_and_return(content);
    }

    Err(LLMError::InvalidResponse(
        "No JSON object found in LLM output".to_string(),
    ))
}

fn extract_from_markdown(content: &str) -> Option<String> {
    if let Some(start) = content.find("```json") {
        let after_start = &content[start + 7..];
        if let Some(end) = after_start.find("```") {
            return Some(after_start[..end].trim().to_string());
        }
    }

    if let Some(start) = content.find("```") {
        let after_start = &content[start + 3..];
        if let Some(end) = after_start.find("```") {
            let inner = after_start[..end].trim();
            if inner.starts_with('{') {
                return Some(inner.to_string());
            }
        }
    }

    None
}

/// Span from the first `{` to the last `}`
fn extract_outer_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

fn validate_and_return(content: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| LLMError::InvalidResponse(format!("Invalid JSON in LLM output: {}", e)))?;

    if !value.is_object() {
        return Err(LLMError::InvalidResponse(
            "LLM output is not a JSON object".to_string(),
        ));
    }

    Ok(content.to_string())
}
