//! DOT identifier helpers.
//!
//! Graphviz accepts a bare identifier when it is an alphanumeric word that does
//! not start with a digit, or a numeral. Anything else must be written as a
//! double-quoted string with embedded quotes and backslashes escaped.

use std::borrow::Cow;

/// DOT keywords, matched case-insensitively, which cannot be used as bare IDs.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Escapes a string for use inside a double-quoted DOT identifier.
///
/// # Examples
///
/// ```rust
/// use compactgraph::utils::escape_dot;
///
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// Returns `true` if `s` can be emitted as a DOT identifier without quoting.
#[must_use]
pub fn is_plain_identifier(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };

    if first.is_ascii_digit() {
        return s.chars().all(|c| c.is_ascii_digit());
    }

    (first.is_ascii_alphabetic() || first == '_')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(s))
}

/// Returns `s` verbatim if it is a plain identifier, quoted and escaped otherwise.
#[must_use]
pub fn dot_identifier(s: &str) -> Cow<'_, str> {
    if is_plain_identifier(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("\"{}\"", escape_dot(s)))
    }
}
