//! Interactive collection of values for parsed template entries.
//!
//! Each entry is prompted in order as `KEY [default]: `; an empty answer
//! keeps the default. Keys whose names look sensitive are read without echo.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::defaults::SENSITIVE_HINTS;
use crate::template::TemplateEntry;

/// Answer source for the prompting loop.
///
/// The terminal implementation reads stdin and masks sensitive keys; tests
/// substitute a scripted source so no TTY is needed.
pub trait PromptSource {
    /// Read one echoed answer for `prompt`; `None` on EOF or read failure.
    fn read_visible(&mut self, prompt: &str) -> Option<String>;
    /// Read one non-echoed answer for `prompt`; `None` on read failure.
    fn read_masked(&mut self, prompt: &str) -> Option<String>;
}

/// Terminal-backed [`PromptSource`] using stdin and masked reads.
pub struct TerminalPrompt;

impl PromptSource for TerminalPrompt {
    fn read_visible(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        io::stdout().flush().ok()?;
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn read_masked(&mut self, prompt: &str) -> Option<String> {
        rpassword::prompt_password(prompt).ok()
    }
}

/// What: Decide whether a key's value should be read without echo.
///
/// Inputs:
/// - `key`: Variable name from the template.
/// - `extra_hints`: Additional hint substrings from the command line.
///
/// Output:
/// - `true` when the upper-cased key contains any built-in or extra hint.
#[must_use]
pub fn should_mask(key: &str, extra_hints: &[String]) -> bool {
    let upper = key.to_uppercase();
    SENSITIVE_HINTS.iter().any(|hint| upper.contains(hint))
        || extra_hints
            .iter()
            .any(|hint| upper.contains(&hint.to_uppercase()))
}

/// What: Prompt for every entry, falling back to defaults on empty input.
///
/// Inputs:
/// - `entries`: Parsed `(key, default)` pairs in template order.
/// - `extra_hints`: Additional sensitivity hints for masking.
/// - `source`: Answer source (terminal or scripted).
///
/// Output:
/// - `(key, value)` pairs in entry order. An empty answer, EOF, or a read
///   failure keeps the declared default.
pub fn prompt_for_values(
    entries: &[TemplateEntry],
    extra_hints: &[String],
    source: &mut dyn PromptSource,
) -> Vec<(String, String)> {
    let mut filled = Vec::with_capacity(entries.len());
    for entry in entries {
        let prompt = if entry.default.is_empty() {
            format!("{}: ", entry.key)
        } else {
            format!("{} [{}]: ", entry.key, entry.default)
        };
        let masked = should_mask(&entry.key, extra_hints);
        let answer = if masked {
            source.read_masked(&prompt)
        } else {
            source.read_visible(&prompt)
        };
        if answer.is_none() {
            debug!(key = %entry.key, "no input available, keeping default");
        }
        let value = match answer {
            Some(text) if !text.is_empty() => text,
            _ => entry.default.clone(),
        };
        filled.push((entry.key.clone(), value));
    }
    filled
}

/// What: Accept every declared default without prompting.
///
/// Inputs:
/// - `entries`: Parsed `(key, default)` pairs.
///
/// Output:
/// - `(key, default)` pairs in entry order.
#[must_use]
pub fn accept_defaults(entries: &[TemplateEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| (entry.key.clone(), entry.default.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted [`PromptSource`] feeding canned answers and recording which
    /// prompts were masked.
    struct Scripted {
        answers: Vec<Option<String>>,
        next: usize,
        masked_prompts: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
                next: 0,
                masked_prompts: Vec::new(),
            }
        }

        fn take(&mut self) -> Option<String> {
            let answer = self.answers.get(self.next).cloned().flatten();
            self.next += 1;
            answer
        }
    }

    impl PromptSource for Scripted {
        fn read_visible(&mut self, _prompt: &str) -> Option<String> {
            self.take()
        }

        fn read_masked(&mut self, prompt: &str) -> Option<String> {
            self.masked_prompts.push(prompt.to_string());
            self.take()
        }
    }

    fn entry(key: &str, default: &str) -> TemplateEntry {
        TemplateEntry {
            key: key.to_string(),
            default: default.to_string(),
        }
    }

    #[test]
    /// What: Built-in hints flag sensitive keys case-insensitively.
    ///
    /// Inputs:
    /// - Key names containing `key`, `PASSWORD`, `secret`, `token`, and a
    ///   harmless name.
    ///
    /// Output:
    /// - Masking required exactly for the hinted names.
    fn prompt_should_mask_from_hints() {
        assert!(should_mask("api_key", &[]));
        assert!(should_mask("PASSWORD", &[]));
        assert!(should_mask("user_secret_id", &[]));
        assert!(should_mask("access_token", &[]));
        assert!(!should_mask("username", &[]));
    }

    #[test]
    /// What: Extra hints from the command line extend the built-in set.
    ///
    /// Inputs:
    /// - A key matching only the extra hint `pin`.
    ///
    /// Output:
    /// - Masked with the extra hint, unmasked without.
    fn prompt_should_mask_extra_hints() {
        let hints = vec!["pin".to_string()];
        assert!(should_mask("CARD_PIN", &hints));
        assert!(!should_mask("CARD_PIN", &[]));
    }

    #[test]
    /// What: Empty answers keep defaults; non-empty answers replace them.
    ///
    /// Inputs:
    /// - Two entries, the first answered with an empty line, the second with
    ///   `custom`.
    ///
    /// Output:
    /// - `[("NAME", "default"), ("CITY", "custom")]`.
    fn prompt_uses_defaults_and_user_input() {
        let entries = [entry("NAME", "default"), entry("CITY", "")];
        let mut source = Scripted::new(&[Some(""), Some("custom")]);
        let filled = prompt_for_values(&entries, &[], &mut source);
        assert_eq!(
            filled,
            vec![
                ("NAME".to_string(), "default".to_string()),
                ("CITY".to_string(), "custom".to_string()),
            ]
        );
    }

    #[test]
    /// What: Sensitive keys are routed through the masked reader.
    ///
    /// Inputs:
    /// - A `DB_PASSWORD` entry answered with `maskedval`.
    ///
    /// Output:
    /// - The masked reader is used and its answer taken; the prompt shows
    ///   the key name.
    fn prompt_masks_sensitive_keys() {
        let entries = [entry("DB_PASSWORD", "")];
        let mut source = Scripted::new(&[Some("maskedval")]);
        let filled = prompt_for_values(&entries, &[], &mut source);
        assert_eq!(filled, vec![("DB_PASSWORD".to_string(), "maskedval".to_string())]);
        assert_eq!(source.masked_prompts, vec!["DB_PASSWORD: ".to_string()]);
    }

    #[test]
    /// What: EOF (a `None` read) falls back to the default and continues.
    ///
    /// Inputs:
    /// - One entry with a default and no available input.
    ///
    /// Output:
    /// - The default survives.
    fn prompt_eof_keeps_default() {
        let entries = [entry("CITY", "default")];
        let mut source = Scripted::new(&[None]);
        let filled = prompt_for_values(&entries, &[], &mut source);
        assert_eq!(filled, vec![("CITY".to_string(), "default".to_string())]);
    }

    #[test]
    /// What: Non-empty defaults appear in the prompt text in brackets.
    ///
    /// Inputs:
    /// - A masked `TOKEN` entry with default `abc`.
    ///
    /// Output:
    /// - Prompt rendered as `TOKEN [abc]: `.
    fn prompt_shows_default_in_brackets() {
        let entries = [entry("TOKEN", "abc")];
        let mut source = Scripted::new(&[Some("")]);
        let filled = prompt_for_values(&entries, &[], &mut source);
        assert_eq!(filled, vec![("TOKEN".to_string(), "abc".to_string())]);
        assert_eq!(source.masked_prompts, vec!["TOKEN [abc]: ".to_string()]);
    }

    #[test]
    /// What: Accepting defaults needs no prompting at all.
    ///
    /// Inputs:
    /// - Two entries with mixed defaults.
    ///
    /// Output:
    /// - `(key, default)` pairs in order.
    fn prompt_accept_defaults() {
        let entries = [entry("A", "1"), entry("B", "")];
        assert_eq!(
            accept_defaults(&entries),
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), String::new()),
            ]
        );
    }
}
