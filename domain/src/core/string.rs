//! String utilities for the domain layer.

/// Shorten text for a log line, appending an ellipsis (UTF-8 safe)
///
/// `max_len` is a byte budget; the cut is moved back to the nearest
/// character boundary.
pub fn preview(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Count whitespace-separated words
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
