//! String utilities for the domain layer.

/// Truncate a string to at most `max_len` bytes, appending an ellipsis.
///
/// Truncation never splits a UTF-8 character: the cut point backs up to the
/// nearest character boundary. Strings already within the limit are returned
/// unchanged.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let target = max_len.saturating_sub(3);
    let mut end = target.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
