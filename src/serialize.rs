//! Rendering final values back into `.env` assignment lines.
//!
//! The inverse of the template parser's unquoting step, restricted to
//! double-quote output: values that would be misread when left bare are
//! wrapped in `"` after escaping backslashes and embedded quotes.

/// What: Decide whether a value must be double-quoted when serialized.
///
/// Inputs:
/// - `value`: Final value text.
///
/// Output:
/// - `false` for the empty string; `true` when the value has leading or
///   trailing whitespace or contains a space, `#`, or `;`; `false` otherwise.
#[must_use]
pub fn needs_quotes(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value != value.trim() {
        return true;
    }
    value.contains(' ') || value.contains('#') || value.contains(';')
}

/// What: Render a value, quoting and escaping when required.
///
/// Inputs:
/// - `value`: Final value text.
///
/// Output:
/// - The value unchanged when safe to leave bare; otherwise wrapped in
///   double quotes with `\` escaped before `"` so newly introduced
///   backslashes are never re-escaped.
#[must_use]
pub fn serialize_value(value: &str) -> String {
    if needs_quotes(value) {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
