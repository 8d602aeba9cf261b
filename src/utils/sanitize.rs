//! Utilities for sanitizing text that came from remote hosts.
//!
//! Page titles and URLs are attacker-controlled. They are stripped of control
//! characters before they reach the terminal, so a title cannot smuggle ANSI
//! escape sequences into the report.
//!
//! Also provides filename-safe rendering of the target domain.

/// Removes control characters from text destined for a single display line.
///
/// Drops C0 controls (0x00-0x1F, newlines and tabs included), DEL (0x7F)
/// and C1 controls (0x80-0x9F). Tabs and newlines are replaced by a space so
/// adjacent words stay apart.
///
/// # Arguments
///
/// * `text` - The text to sanitize
///
/// # Returns
///
/// The text with control characters removed.
pub fn sanitize_display_text(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Makes `name` safe to embed in a file name.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; everything else becomes `_`.
/// An empty result becomes `"unknown"`.
pub fn sanitize_filename_component(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "unknown".to_string()
    } else {
        cleaned
    }
}
