//! Escaping of free-form prompt text for embedding in a JSON string field.

/// Escape arbitrary text so it can sit verbatim between the quotes of a
/// JSON string literal.
///
/// Backslashes must be escaped before anything else: escaping any other
/// character first would introduce backslashes that themselves need (but
/// would not receive) escaping. Newlines, carriage returns, and tabs
/// collapse to their two-character escapes, so the result is a single line.
pub fn escape_json_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('"', "\\\"")
}
