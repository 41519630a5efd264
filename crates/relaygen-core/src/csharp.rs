//! C# identifier rules.
//!
//! Descriptor identifiers may be written either raw (`event`) or with the
//! verbatim marker (`@event`). Generated code needs both shapes: the raw name
//! when the identifier is glued onto a generated prefix, and the escaped name
//! everywhere the identifier stands alone.

use std::borrow::Cow;

/// Reserved C# keywords. Contextual keywords (`var`, `async`, ...) are valid
/// identifiers and are not listed.
const KEYWORDS: &[&str] = &[
    "abstract",
    "as",
    "base",
    "bool",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "checked",
    "class",
    "const",
    "continue",
    "decimal",
    "default",
    "delegate",
    "do",
    "double",
    "else",
    "enum",
    "event",
    "explicit",
    "extern",
    "false",
    "finally",
    "fixed",
    "float",
    "for",
    "foreach",
    "goto",
    "if",
    "implicit",
    "in",
    "int",
    "interface",
    "internal",
    "is",
    "lock",
    "long",
    "namespace",
    "new",
    "null",
    "object",
    "operator",
    "out",
    "override",
    "params",
    "private",
    "protected",
    "public",
    "readonly",
    "ref",
    "return",
    "sbyte",
    "sealed",
    "short",
    "sizeof",
    "stackalloc",
    "static",
    "string",
    "struct",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "uint",
    "ulong",
    "unchecked",
    "unsafe",
    "ushort",
    "using",
    "virtual",
    "void",
    "volatile",
    "while",
];

/// Whether `name` is a reserved keyword that needs `@` to be used as an identifier.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.binary_search(&name).is_ok()
}

/// Strip the verbatim marker, yielding the identifier's symbol name.
///
/// # Examples
/// ```
/// use relaygen_core::csharp::raw_identifier;
/// assert_eq!(raw_identifier("@event"), "event");
/// assert_eq!(raw_identifier("IApi"), "IApi");
/// ```
pub fn raw_identifier(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

/// Render an identifier for use in source, adding `@` to reserved keywords.
///
/// # Examples
/// ```
/// use relaygen_core::csharp::escape_identifier;
/// assert_eq!(escape_identifier("class"), "@class");
/// assert_eq!(escape_identifier("@class"), "@class");
/// assert_eq!(escape_identifier("@Value"), "Value");
/// ```
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    let raw = raw_identifier(name);
    if is_keyword(raw) {
        Cow::Owned(format!("@{raw}"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Whether `name` is a syntactically valid identifier, with or without `@`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = raw_identifier(name).chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_alphabetic()) && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Open generic form used inside `typeof(...)`: `<>`, `<,>`, ...
pub fn bare_angles(arity: usize) -> String {
    if arity == 0 {
        return String::new();
    }
    format!("<{}>", ",".repeat(arity - 1))
}
