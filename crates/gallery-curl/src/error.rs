//! Generator error types

use thiserror::Error;

/// Error raised while turning a cURL command into function code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Quoting or escaping is not balanced
    #[error("Failed to parse cURL: unbalanced quotes or dangling escape")]
    UnbalancedQuotes,

    /// First token is not `curl`
    #[error("Input must start with curl")]
    MissingCurlPrefix,

    /// A flag that takes a value is the last token
    #[error("Missing value for flag '{flag}'")]
    MissingFlagValue { flag: String },

    /// No token looked like a URL
    #[error("No URL found")]
    MissingUrl,

    /// A binding maps a field to a name that cannot be a Python parameter
    #[error("Invalid parameter name '{name}' for {category} field '{field}'")]
    InvalidParameterName {
        category: String,
        field: String,
        name: String,
    },

    /// The binding map itself could not be decoded
    #[error("Invalid binding map: {0}")]
    InvalidBindingMap(String),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::MissingCurlPrefix.to_string(),
            "Input must start with curl"
        );
        assert_eq!(ParseError::MissingUrl.to_string(), "No URL found");
        assert_eq!(
            ParseError::MissingFlagValue {
                flag: "-H".to_string()
            }
            .to_string(),
            "Missing value for flag '-H'"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
    }
}
