//! Python literal rendering

use serde_json::Value;

/// Render `s` as a Python string literal the way `repr()` does: single quotes
/// unless the text contains a single quote and no double quote.
pub fn repr_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    quoted(s, quote, false)
}

/// Single-quoted literal with both quote characters escaped
pub fn single_quoted(s: &str) -> String {
    quoted(s, '\'', true)
}

/// Double-quoted literal
pub fn double_quoted(s: &str) -> String {
    quoted(s, '"', false)
}

/// Scalar JSON value as a Python literal. Containers are walked by the caller
/// and only reach this as JSON text.
pub fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => repr_str(s),
        other => other.to_string(),
    }
}

fn quoted(s: &str, quote: char, escape_both: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\'' | '"' if c == quote || escape_both => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repr_str_quote_choice() {
        assert_eq!(repr_str("abc"), "'abc'");
        assert_eq!(repr_str("it's"), "\"it's\"");
        assert_eq!(repr_str(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(repr_str(r#"it's "x""#), r#"'it\'s "x"'"#);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(repr_str("a\\b"), r"'a\\b'");
        assert_eq!(repr_str("line\nnext\ttab"), r"'line\nnext\ttab'");
        assert_eq!(repr_str("\u{1}"), r"'\x01'");
        assert_eq!(repr_str("café"), "'café'");
    }

    #[test]
    fn test_single_quoted_escapes_both_quotes() {
        assert_eq!(single_quoted(r#"a"b'c"#), r#"'a\"b\'c'"#);
    }

    #[test]
    fn test_double_quoted() {
        assert_eq!(
            double_quoted("https://example.com/\"x\""),
            r#""https://example.com/\"x\"""#
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(scalar(&json!(null)), "None");
        assert_eq!(scalar(&json!(true)), "True");
        assert_eq!(scalar(&json!(false)), "False");
        assert_eq!(scalar(&json!(42)), "42");
        assert_eq!(scalar(&json!(1.5)), "1.5");
        assert_eq!(scalar(&json!("123")), "'123'");
    }
}
