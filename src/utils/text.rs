//! Text formatting helpers

use crate::constants::TRUNCATE_DEFAULT_LEN;

/// Uppercase the first character and lowercase the remainder
///
/// Internal capitals are not preserved: `"McDonald"` becomes `"Mcdonald"`.
/// Empty input yields the empty string.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Cut text to `max_len` characters, appending `...` when it was longer
///
/// Text at or under `max_len` characters is returned unchanged; longer text is
/// cut to exactly `max_len` characters plus the three-character ellipsis.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_len).collect();
    format!("{cut}...")
}

/// [`truncate`] with the standard maximum length for list views
pub fn truncate_default(text: &str) -> String {
    truncate(text, TRUNCATE_DEFAULT_LEN)
}
