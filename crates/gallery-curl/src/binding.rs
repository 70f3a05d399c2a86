//! Dynamic binding resolution
//!
//! A [`BindingMap`] names the literal values of a request that should become
//! parameters of the generated function. Headers and query parameters are
//! matched by name. JSON body fields are matched either by a dot-separated
//! path from the root (`customer.address.city`) or by bare key name (`city`),
//! with the path taking precedence.
//!
//! Array elements are visited with the path of the array itself, so a binding
//! cannot target a single element by position.

use crate::error::{ParseError, Result};
use crate::payload::{NormalizedRequest, Payload};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Python keywords, never valid as parameter names
const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Names the generated function body assigns, imports or calls
const RESERVED_NAMES: [&str; 16] = [
    "url",
    "headers",
    "params",
    "payload",
    "payload_dict",
    "response",
    "res_status",
    "res_json",
    "res_text",
    "requests",
    "json",
    "traceback",
    "e",
    "print",
    "Exception",
    "customFunction",
];

/// Mapping from request fields to generated parameter names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingMap {
    /// Query parameter name -> parameter name
    #[serde(default)]
    pub params: IndexMap<String, String>,

    /// Header name -> parameter name
    #[serde(default)]
    pub headers: IndexMap<String, String>,

    /// Body key or dotted path -> parameter name
    #[serde(default)]
    pub json: IndexMap<String, String>,
}

impl BindingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the JSON wire shape `{"params": {..}, "headers": {..}, "json": {..}}`
    pub fn from_json_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(input).map_err(|e| ParseError::InvalidBindingMap(e.to_string()))
    }

    pub fn with_param(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.insert(field.into(), name.into());
        self
    }

    pub fn with_header(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.headers.insert(field.into(), name.into());
        self
    }

    pub fn with_json(mut self, locator: impl Into<String>, name: impl Into<String>) -> Self {
        self.json.insert(locator.into(), name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.headers.is_empty() && self.json.is_empty()
    }

    /// Categories in signature order
    fn categories(&self) -> [(&'static str, &IndexMap<String, String>); 3] {
        [
            ("params", &self.params),
            ("headers", &self.headers),
            ("json", &self.json),
        ]
    }

    /// Distinct parameter names: params, then headers, then json, each in map order
    pub fn signature(&self) -> Vec<String> {
        let names: IndexSet<&String> = self
            .categories()
            .into_iter()
            .flat_map(|(_, map)| map.values())
            .collect();
        names.into_iter().cloned().collect()
    }

    /// Check that every bound name is a usable Python parameter
    pub fn validate(&self) -> Result<()> {
        for (category, map) in self.categories() {
            for (field, name) in map {
                if !is_valid_parameter_name(name) {
                    return Err(ParseError::InvalidParameterName {
                        category: category.to_string(),
                        field: field.clone(),
                        name: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Identifier check for generated parameters
pub fn is_valid_parameter_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());

    starts_ok
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !PYTHON_KEYWORDS.contains(&name)
        && !RESERVED_NAMES.contains(&name)
}

/// Value of a flat header or query parameter entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Reference to a function parameter
    Param(String),
    /// Literal string constant
    Literal(String),
}

/// Header or query parameter after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub key: String,
    pub value: FieldValue,
}

/// Payload tree node after resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedNode {
    Object(Vec<(String, ResolvedNode)>),
    Array(Vec<ResolvedNode>),
    /// Reference to a function parameter replacing the original value
    Param(String),
    /// String, number, boolean or null
    Scalar(Value),
}

/// Resolved request body
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPayload {
    None,
    /// Unparseable body, emitted verbatim
    Raw(String),
    Tree(ResolvedNode),
}

/// Everything the emitter needs
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub method: String,
    pub url: String,
    pub signature: Vec<String>,
    pub headers: Vec<ResolvedEntry>,
    pub params: Vec<ResolvedEntry>,
    pub payload: ResolvedPayload,
}

/// Dynamic binding resolver
pub struct BindingResolver;

impl BindingResolver {
    /// Apply `bindings` to a normalized request
    pub fn resolve(request: &NormalizedRequest, bindings: &BindingMap) -> ResolvedRequest {
        let descriptor = &request.descriptor;

        let payload = match &request.payload {
            Payload::Empty => ResolvedPayload::None,
            Payload::Raw(raw) => ResolvedPayload::Raw(raw.clone()),
            Payload::Structured(value) => {
                ResolvedPayload::Tree(Self::resolve_node(value, &bindings.json, ""))
            }
        };

        ResolvedRequest {
            method: descriptor.method.clone(),
            url: descriptor.url.clone(),
            signature: bindings.signature(),
            headers: Self::resolve_flat(&descriptor.headers, &bindings.headers),
            params: Self::resolve_flat(&descriptor.query_params, &bindings.params),
            payload,
        }
    }

    fn resolve_flat(
        entries: &IndexMap<String, String>,
        bound: &IndexMap<String, String>,
    ) -> Vec<ResolvedEntry> {
        entries
            .iter()
            .map(|(key, value)| ResolvedEntry {
                key: key.clone(),
                value: match bound.get(key) {
                    Some(name) => FieldValue::Param(name.clone()),
                    None => FieldValue::Literal(value.clone()),
                },
            })
            .collect()
    }

    fn resolve_node(value: &Value, bound: &IndexMap<String, String>, path: &str) -> ResolvedNode {
        match value {
            Value::Object(map) => ResolvedNode::Object(
                map.iter()
                    .map(|(key, child)| {
                        let child_path = if path.is_empty() {
                            key.clone()
                        } else {
                            format!("{}.{}", path, key)
                        };

                        // Exact path first, then bare key at any depth
                        let node = match bound.get(&child_path).or_else(|| bound.get(key)) {
                            Some(name) => ResolvedNode::Param(name.clone()),
                            None => Self::resolve_node(child, bound, &child_path),
                        };
                        (key.clone(), node)
                    })
                    .collect(),
            ),
            Value::Array(items) => ResolvedNode::Array(
                items
                    .iter()
                    .map(|item| Self::resolve_node(item, bound, path))
                    .collect(),
            ),
            scalar => ResolvedNode::Scalar(scalar.clone()),
        }
    }
}
