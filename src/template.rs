//! Template line parsing: turning raw `.env.template` text into an ordered
//! list of `(key, default)` entries.
//!
//! Each line is tokenized independently. A small quote-aware scan tracks
//! single-quote, double-quote, and backslash-escape state so that `#`/`;`
//! comment markers and `=`/`:` separators inside quoted spans stay inert.
//! Lines that cannot be read as a key/value declaration are dropped without
//! error; parsing never fails.

use std::borrow::Cow;

use tracing::debug;

/// A single `(key, default)` declaration surviving all filtering steps.
///
/// Entries keep the order in which their keys appear in the template, and
/// duplicate keys each produce their own entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Variable name; never empty and never contains whitespace.
    pub key: String,
    /// Declared default value after unquoting; may be empty.
    pub default: String,
}

/// What: Decide whether a raw line is blank or a whole-line comment.
///
/// Inputs:
/// - `line`: Raw template line, trailing newline allowed.
///
/// Output:
/// - `true` when the trimmed line is empty or starts with `#` or `;`.
#[must_use]
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
}

/// What: Drop a leading `export ` keyword while keeping the indentation.
///
/// Inputs:
/// - `line`: Line content after newline trimming.
///
/// Output:
/// - The line without the `export ` token, original leading whitespace
///   preserved; borrowed unchanged when no prefix is present.
#[must_use]
pub fn strip_leading_export(line: &str) -> Cow<'_, str> {
    let content_start = line.len() - line.trim_start().len();
    let (indent, content) = line.split_at(content_start);
    match content.strip_prefix("export ") {
        Some(rest) => Cow::Owned(format!("{indent}{rest}")),
        None => Cow::Borrowed(line),
    }
}

/// What: Find the first unquoted, unescaped character satisfying `pred`.
///
/// Inputs:
/// - `s`: Line text to scan.
/// - `pred`: Predicate selecting the structurally significant characters.
///
/// Output:
/// - Byte index of the first match outside any quoted span, or `None`.
///
/// Details:
/// - A backslash escapes exactly the next character; an escaped character
///   never toggles quote state and never matches.
/// - `'` toggles single-quote state outside double quotes; `"` toggles
///   double-quote state outside single quotes. An unterminated quote leaves
///   the scan inside the span for the rest of the line.
fn scan_unquoted(s: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;
    for (idx, ch) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            c if !in_single && !in_double && pred(c) => return Some(idx),
            _ => {}
        }
    }
    None
}

/// What: Strip a trailing `#` or `;` comment occurring outside quotes.
///
/// Inputs:
/// - `s`: Line content after prefix stripping.
///
/// Output:
/// - The line up to the first unquoted comment marker, trailing whitespace
///   trimmed; the whole trimmed line when no marker is found.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    match scan_unquoted(s, |c| c == '#' || c == ';') {
        Some(idx) => s[..idx].trim_end(),
        None => s.trim_end(),
    }
}

/// What: Split a line into `(key, value)` on the first unquoted separator.
///
/// Inputs:
/// - `s`: Comment-free line content.
///
/// Output:
/// - `Some((key, value))` with both sides trimmed when an unquoted `=` or
///   `:` exists; `None` otherwise.
#[must_use]
pub fn split_key_value(s: &str) -> Option<(&str, &str)> {
    // Both separators are ASCII, so idx + 1 stays on a char boundary.
    let idx = scan_unquoted(s, |c| c == '=' || c == ':')?;
    Some((s[..idx].trim(), s[idx + 1..].trim()))
}

/// What: Remove a surrounding quote pair and unescape double-quoted text.
///
/// Inputs:
/// - `value`: Trimmed value text, possibly quoted.
///
/// Output:
/// - The inner text when the first and last characters are a matching `"` or
///   `'` pair; double-quoted values additionally get `\"` and `\\` unescaped,
///   in that order. Anything else is returned unchanged.
///
/// Details:
/// - Not recursive: one outer pair at most is removed.
#[must_use]
pub fn unquote(value: &str) -> String {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        let inner = &value[1..value.len() - 1];
        if value.starts_with('"') {
            return inner.replace("\\\"", "\"").replace("\\\\", "\\");
        }
        return inner.to_string();
    }
    value.to_string()
}

/// What: Parse one raw template line into an entry.
///
/// Inputs:
/// - `raw`: One line of template text, trailing newline allowed.
///
/// Output:
/// - `Some(TemplateEntry)` when the line declares a key; `None` for blank,
///   comment, or malformed lines.
///
/// Details:
/// - Pipeline: comment/blank classification, `export ` prefix stripping,
///   inline comment stripping, separator split, key validation, unquoting.
/// - A key is valid when it is non-empty and contains no whitespace.
#[must_use]
pub fn parse_template_line(raw: &str) -> Option<TemplateEntry> {
    if is_comment_or_blank(raw) {
        return None;
    }
    let line = strip_leading_export(raw.trim_end_matches(['\n', '\r']));
    let line = strip_inline_comment(&line);
    if line.trim().is_empty() {
        return None;
    }
    let (key, value) = split_key_value(line)?;
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return None;
    }
    Some(TemplateEntry {
        key: key.to_string(),
        default: unquote(value),
    })
}

/// What: Parse full template text into ordered `(key, default)` entries.
///
/// Inputs:
/// - `content`: Template text; lines are processed independently in order.
///
/// Output:
/// - All entries from lines that survive filtering, in input order. Never
///   fails; unusable lines are skipped.
#[must_use]
pub fn parse_template_lines(content: &str) -> Vec<TemplateEntry> {
    let mut entries = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        if let Some(entry) = parse_template_line(raw) {
            entries.push(entry);
        } else if !is_comment_or_blank(raw) {
            debug!(line = idx + 1, "skipping malformed template line");
        }
    }
    entries
}
