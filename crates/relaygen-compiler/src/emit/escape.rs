//! C# regular string literals.
//!
//! `quote_string` renders any `&str` as a `"..."` literal. `unquote_string`
//! parses one back, so the emitter can check that a literal it produced
//! decodes to the value it started from.

use std::fmt::Write;

use super::EmitError;

/// Render `value` as a regular (non-verbatim) C# string literal.
///
/// # Examples
/// ```
/// use relaygen_compiler::emit::quote_string;
/// assert_eq!(quote_string(r#"pr"od"#), r#""pr\"od""#);
/// assert_eq!(quote_string("a\\b\n"), r#""a\\b\n""#);
/// ```
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            // Remaining controls plus the characters C# treats as line breaks.
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render an optional value: absent values become `null`.
pub fn quote_optional(value: Option<&str>) -> String {
    value.map_or_else(|| "null".to_string(), quote_string)
}

/// Parse a regular C# string literal, returning its value.
///
/// Returns `None` for anything the literal grammar rejects: missing quotes,
/// an unescaped `"` or line break inside, or a malformed escape sequence.
pub fn unquote_string(literal: &str) -> Option<String> {
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}' => return None,
            '\\' => {
                let decoded = match chars.next()? {
                    '\'' => '\'',
                    '"' => '"',
                    '\\' => '\\',
                    '0' => '\0',
                    'a' => '\u{7}',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\u{b}',
                    'u' => hex_char(&mut chars, 4, 4)?,
                    'U' => hex_char(&mut chars, 8, 8)?,
                    'x' => hex_char(&mut chars, 1, 4)?,
                    _ => return None,
                };
                out.push(decoded);
            }
            c => out.push(c),
        }
    }
    Some(out)
}

fn hex_char(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    min: usize,
    max: usize,
) -> Option<char> {
    let mut code = 0u32;
    let mut len = 0;
    while len < max {
        let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) else {
            break;
        };
        chars.next();
        code = code * 16 + digit;
        len += 1;
    }
    if len < min {
        return None;
    }
    char::from_u32(code)
}

/// Quote `value`, failing if the literal does not decode back to it.
pub(crate) fn checked_literal(value: &str) -> Result<String, EmitError> {
    let literal = quote_string(value);
    if unquote_string(&literal).as_deref() == Some(value) {
        Ok(literal)
    } else {
        Err(EmitError::UnrepresentableLiteral {
            value: value.to_string(),
        })
    }
}

/// Like [`checked_literal`], with `null` for absent values.
pub(crate) fn checked_optional_literal(value: Option<&str>) -> Result<String, EmitError> {
    match value {
        Some(value) => checked_literal(value),
        None => Ok(quote_optional(None)),
    }
}
