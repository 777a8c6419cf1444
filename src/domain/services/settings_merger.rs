//! Settings merger
//!
//! Injects missing `"key": value` pairs into a JSON-like settings document
//! without parsing it. Hand-edited settings files carry comments and trailing
//! commas, so the document is treated as text:
//!
//! 1. a pair counts as present when `"key"`, optional whitespace, `:`,
//!    optional whitespace and the canonical value appear anywhere;
//! 2. missing pairs are spliced in before the last `}`.
//!
//! A pair mentioned inside a comment or string literal is a false positive
//! and will not be inserted.

use crate::domain::entities::{RequiredSetting, RequiredSettings};

/// Document used when the settings file does not exist yet
pub const EMPTY_DOCUMENT: &str = "{}";

const INDENT: &str = "  ";

/// Result of one merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Full document after the merge
    pub text: String,
    /// Pairs that were missing, in required order
    pub inserted: Vec<RequiredSetting>,
}

impl MergeOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Whether `text` already holds `setting` with its canonical value
pub fn is_present(text: &str, setting: &RequiredSetting) -> bool {
    let key = setting.quoted_key();
    let value = setting.canonical_value();

    text.match_indices(key.as_str()).any(|(start, _)| {
        let rest = text[start + key.len()..].trim_start();
        match rest.strip_prefix(':') {
            Some(rest) => rest.trim_start().starts_with(value.as_str()),
            None => false,
        }
    })
}

/// Required pairs absent from `text`, in required order
pub fn missing_settings<'a>(
    text: &str,
    required: &'a RequiredSettings,
) -> Vec<&'a RequiredSetting> {
    required.iter().filter(|s| !is_present(text, s)).collect()
}

/// Merge `required` into `existing`.
///
/// `existing` is returned untouched when nothing is missing. Every byte
/// outside the insertion point is preserved.
pub fn merge(existing: &str, required: &RequiredSettings) -> MergeOutcome {
    let missing: Vec<RequiredSetting> = missing_settings(existing, required)
        .into_iter()
        .cloned()
        .collect();

    if missing.is_empty() {
        return MergeOutcome {
            text: existing.to_string(),
            inserted: missing,
        };
    }

    let snippet = render_snippet(&missing);

    let Some(brace) = existing.rfind('}') else {
        return MergeOutcome {
            text: format!("{{\n{snippet}\n}}\n"),
            inserted: missing,
        };
    };

    let (before, after) = existing.split_at(brace);
    let trimmed = before.trim_end();
    let needs_comma = !trimmed.is_empty() && !trimmed.ends_with('{');

    let mut text = String::with_capacity(existing.len() + snippet.len() + 4);
    text.push_str(before);
    if needs_comma {
        text.push_str(",\n");
    } else if !before.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(&snippet);
    text.push('\n');
    text.push_str(after);

    MergeOutcome {
        text,
        inserted: missing,
    }
}

/// Merge into a document that may not exist yet (treated as `{}`)
pub fn merge_document(existing: Option<&str>, required: &RequiredSettings) -> MergeOutcome {
    let base = existing.unwrap_or(EMPTY_DOCUMENT);
    merge(base, required)
}

fn render_snippet(settings: &[RequiredSetting]) -> String {
    settings
        .iter()
        .map(|s| format!("{INDENT}{}", s.render()))
        .collect::<Vec<_>>()
        .join(",\n")
}
