//! Column formatting helpers.

const ELLIPSIS: &str = "...";

/// Shortens `text` to at most `width` characters.
///
/// Text longer than `width` keeps its first `width - 3` characters followed
/// by `...`. Counts characters, not bytes.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Percentage of `part` in `total`, `0.0` for an empty total.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
