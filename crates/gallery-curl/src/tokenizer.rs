//! Command tokenizer
//!
//! Splits a shell-style cURL invocation into tokens using POSIX quoting rules.
//! Outside quotes, line continuations are folded away first so commands copied
//! from a terminal (`\`) or from Windows `cmd` (`^`) tokenize the same way.
//! Quoted text reaches `shlex` untouched.

use crate::error::{ParseError, Result};

/// Command tokenizer
pub struct CommandTokenizer;

impl CommandTokenizer {
    /// Tokenize a cURL command, checking that it starts with `curl`
    pub fn tokenize(input: &str) -> Result<Vec<String>> {
        let prepared = Self::prepare(input);

        let tokens = shlex::split(&prepared).ok_or(ParseError::UnbalancedQuotes)?;

        match tokens.first() {
            Some(first) if first == "curl" => Ok(tokens),
            _ => Err(ParseError::MissingCurlPrefix),
        }
    }

    /// Fold unquoted continuations and carriage returns into spaces, and
    /// escape a `#` opening a word so it is not read as a comment.
    fn prepare(input: &str) -> String {
        let mut prepared = String::with_capacity(input.len());
        let mut quote: Option<char> = None;
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            match (quote, c) {
                (Some(q), c) if c == q => {
                    quote = None;
                    prepared.push(c);
                }
                (Some('"'), '\\') => {
                    prepared.push(c);
                    prepared.extend(chars.next());
                }
                (Some(_), c) => prepared.push(c),
                (None, '\'' | '"') => {
                    quote = Some(c);
                    prepared.push(c);
                }
                (None, '\\' | '^') if line_break_len(chars.as_str()) > 0 => {
                    let rest = chars.as_str();
                    chars = rest[line_break_len(rest)..].chars();
                    prepared.push(' ');
                }
                (None, '\\') => {
                    prepared.push(c);
                    prepared.extend(chars.next());
                }
                (None, '\r') => prepared.push(' '),
                (None, '#') if prepared.chars().last().map_or(true, char::is_whitespace) => {
                    prepared.push_str("\\#");
                }
                (None, c) => prepared.push(c),
            }
        }

        prepared
    }
}

/// Length of the line break opening `rest`, 0 if there is none
fn line_break_len(rest: &str) -> usize {
    if rest.starts_with("\r\n") {
        2
    } else if rest.starts_with('\n') {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quoted_arguments() {
        let tokens = CommandTokenizer::tokenize(
            r#"curl -H "Content-Type: application/json" 'https://example.com/a b'"#,
        )
        .unwrap();

        assert_eq!(
            tokens,
            vec![
                "curl",
                "-H",
                "Content-Type: application/json",
                "https://example.com/a b"
            ]
        );
    }

    #[test]
    fn test_tokenize_unix_continuations() {
        let tokens =
            CommandTokenizer::tokenize("curl 'https://example.com' \\\n  -H 'X-Key: 1'").unwrap();
        assert_eq!(tokens, vec!["curl", "https://example.com", "-H", "X-Key: 1"]);
    }

    #[test]
    fn test_tokenize_windows_continuations() {
        let tokens =
            CommandTokenizer::tokenize("curl \"https://example.com\" ^\r\n  -X POST").unwrap();
        assert_eq!(tokens, vec!["curl", "https://example.com", "-X", "POST"]);
    }

    #[test]
    fn test_unbalanced_quotes() {
        let result = CommandTokenizer::tokenize("curl 'https://example.com");
        assert_eq!(result, Err(ParseError::UnbalancedQuotes));
    }

    #[test]
    fn test_missing_curl_prefix() {
        assert_eq!(
            CommandTokenizer::tokenize("wget https://example.com"),
            Err(ParseError::MissingCurlPrefix)
        );
        assert_eq!(
            CommandTokenizer::tokenize("   "),
            Err(ParseError::MissingCurlPrefix)
        );
    }

    #[test]
    fn test_quoted_text_is_left_verbatim() {
        let tokens =
            CommandTokenizer::tokenize("curl https://x.io -d 'a=1\r\nb=2\\\nc=3\rd'").unwrap();
        assert_eq!(tokens[3], "a=1\r\nb=2\\\nc=3\rd");
    }

    #[test]
    fn test_continuation_after_quoted_body() {
        let tokens =
            CommandTokenizer::tokenize("curl https://x.io -d 'x\r\ny' \\\r\n  -H 'X: 1'").unwrap();
        assert_eq!(tokens, vec!["curl", "https://x.io", "-d", "x\r\ny", "-H", "X: 1"]);
    }

    #[test]
    fn test_escaped_quote_outside_quotes() {
        let tokens = CommandTokenizer::tokenize(r"curl https://x.io -d it\'s").unwrap();
        assert_eq!(tokens[3], "it's");
    }

    #[test]
    fn test_hash_word_is_a_token() {
        let tokens = CommandTokenizer::tokenize("curl https://x.io -d #tag -H 'X: 1'").unwrap();
        assert_eq!(tokens, vec!["curl", "https://x.io", "-d", "#tag", "-H", "X: 1"]);
    }

    #[test]
    fn test_inner_hash_is_unchanged() {
        let tokens = CommandTokenizer::tokenize("curl 'https://x.io/#frag' -d a#b").unwrap();
        assert_eq!(tokens, vec!["curl", "https://x.io/#frag", "-d", "a#b"]);
    }
}
