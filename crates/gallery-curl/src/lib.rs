//! Gallery cURL - turns a captured cURL command into a callable Python function
//!
//! The conversion is a pure text-to-text pipeline:
//!
//! ```text
//! command ──► CommandTokenizer ──► RequestDescriptor ──► NormalizedRequest
//!                                                               │
//!                                          BindingMap ──► BindingResolver
//!                                                               │
//!                                                        FunctionCodegen ──► code
//! ```
//!
//! # Example
//!
//! ```
//! use gallery_curl::{generate_function_code, BindingMap};
//!
//! let bindings = BindingMap::new().with_header("Authorization", "auth_token");
//! let code = generate_function_code(
//!     "curl https://api.example.com/me -H 'Authorization: Bearer k'",
//!     &bindings,
//! )
//! .unwrap();
//!
//! assert!(code.contains("def customFunction(auth_token: str):"));
//! ```

pub mod binding;
pub mod codegen;
pub mod descriptor;
pub mod error;
pub mod payload;
pub mod tokenizer;

pub use binding::{
    BindingMap, BindingResolver, FieldValue, ResolvedEntry, ResolvedNode, ResolvedPayload,
    ResolvedRequest,
};
pub use codegen::{FunctionCodegen, FUNCTION_NAME};
pub use descriptor::RequestDescriptor;
pub use error::{ParseError, Result};
pub use payload::{NormalizedRequest, Payload};
pub use tokenizer::CommandTokenizer;

/// Parse `curl_command` and resolve it against `bindings` without emitting code
pub fn resolve_request(curl_command: &str, bindings: &BindingMap) -> Result<ResolvedRequest> {
    bindings.validate()?;

    let tokens = CommandTokenizer::tokenize(curl_command)?;
    let descriptor = RequestDescriptor::from_tokens(&tokens)?;
    let request = NormalizedRequest::normalize(descriptor);

    tracing::debug!(
        method = %request.descriptor.method,
        url = %request.descriptor.url,
        headers = request.descriptor.headers.len(),
        params = request.descriptor.query_params.len(),
        "Parsed cURL command"
    );

    Ok(BindingResolver::resolve(&request, bindings))
}

/// Generate the Python source of `customFunction` for a cURL command
pub fn generate_function_code(curl_command: &str, bindings: &BindingMap) -> Result<String> {
    let resolved = resolve_request(curl_command, bindings)?;
    Ok(FunctionCodegen::emit(&resolved))
}
