//! Prompt templates for custom function synthesis

use serde_json::{json, Value};

/// System instruction sent on the first turn of every build-tool session
pub const SYSTEM_MESSAGE: &str = r#"You are a professional code assistant. Use the user's natural-language requirement and write one simple Python function.
Rules:
1. Output Python code with exactly one function named customFunction, a description of the function and a dictionary describing its parameters.
2. No explanations, no comments, no markdown. Only imports and the function.
3. customFunction must include:
    - only the input parameters required from the user (never internal configs)
    - input validation
    - internal logic
    - try/except
    - return {"status": "...", "message": "...", "data": {...}}
4. NEVER generate classes, helper functions, examples, or extra code.
5. All logic must be inside customFunction and under 50 lines.
6. NEVER add parameters for database URIs, API keys, credentials, hosts, ports, or config. These must always be defined inside the function body only.
7. If fuzzy matching, API calls, or processing is needed, implement minimal inline logic.
8. Reply with a JSON object with the fields python_function, function_description and params_description.
Your task: Based on the user's requirement, generate a single customFunction following these rules."#;

/// Schema name reported to providers that support structured output
pub const GENERATED_TOOL_SCHEMA_NAME: &str = "generated_tool";

/// JSON schema of a generated tool reply
pub fn generated_tool_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "python_function": {
                "type": "string",
                "description": "Python function named customFunction according to user requirements."
            },
            "function_description": {
                "type": "string",
                "description": "Description of the function in 25-50 words."
            },
            "params_description": {
                "type": "string",
                "description": "JSON string of key-value pairs where keys are the function parameters and values describe them."
            }
        },
        "required": ["python_function", "function_description", "params_description"],
        "additionalProperties": false
    })
}
