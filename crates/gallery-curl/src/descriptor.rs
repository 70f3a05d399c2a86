//! Request descriptor builder
//!
//! Walks the token stream produced by the tokenizer and collects the pieces
//! of the HTTP request: method, URL, query parameters, headers and body.

use crate::error::{ParseError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const METHOD_FLAGS: [&str; 2] = ["-X", "--request"];
const HEADER_FLAGS: [&str; 2] = ["-H", "--header"];
const DATA_FLAGS: [&str; 5] = [
    "-d",
    "--data",
    "--data-raw",
    "--data-urlencode",
    "--data-binary",
];

/// Default method when no `-X` flag is present
pub const DEFAULT_METHOD: &str = "GET";

/// Structured view of a cURL command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Uppercased HTTP verb
    pub method: String,

    /// Scheme, host and path, with the query string stripped
    pub url: String,

    /// Query parameters in the order they appeared
    pub query_params: IndexMap<String, String>,

    /// Headers in the order they appeared, last duplicate wins
    pub headers: IndexMap<String, String>,

    /// Raw request body, last data flag wins
    pub raw_body: Option<String>,
}

impl RequestDescriptor {
    /// Build a descriptor from tokens. `tokens[0]` is expected to be `curl`.
    pub fn from_tokens(tokens: &[String]) -> Result<Self> {
        let mut method = DEFAULT_METHOD.to_string();
        let mut url: Option<String> = None;
        let mut query_params = IndexMap::new();
        let mut headers = IndexMap::new();
        let mut raw_body = None;

        let mut i = 1;
        while i < tokens.len() {
            let token = tokens[i].as_str();

            if METHOD_FLAGS.contains(&token) {
                method = Self::flag_value(tokens, i)?.to_uppercase();
                i += 2;
            } else if HEADER_FLAGS.contains(&token) {
                if let Some((key, value)) = Self::flag_value(tokens, i)?.split_once(':') {
                    headers.insert(key.trim().to_string(), value.trim().to_string());
                }
                i += 2;
            } else if DATA_FLAGS.contains(&token) {
                raw_body = Some(Self::flag_value(tokens, i)?.to_string());
                i += 2;
            } else if token.starts_with("http") {
                let (base, query) = match token.split_once('?') {
                    Some((base, query)) => (base, Some(query)),
                    None => (token, None),
                };
                if let Some(query) = query {
                    Self::parse_query(query, &mut query_params);
                }
                if url.is_none() {
                    url = Some(base.to_string());
                }
                i += 1;
            } else {
                // Unrecognized flags and stray words are skipped
                i += 1;
            }
        }

        let url = url
            .filter(|u| !u.is_empty())
            .ok_or(ParseError::MissingUrl)?;

        Ok(Self {
            method,
            url,
            query_params,
            headers,
            raw_body,
        })
    }

    /// Value token following the flag at `index`
    fn flag_value(tokens: &[String], index: usize) -> Result<&str> {
        tokens
            .get(index + 1)
            .map(String::as_str)
            .ok_or_else(|| ParseError::MissingFlagValue {
                flag: tokens[index].clone(),
            })
    }

    /// Split `a=1&b=2` into pairs; pairs without `=` are dropped
    fn parse_query(query: &str, params: &mut IndexMap<String, String>) {
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                params.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }
}
