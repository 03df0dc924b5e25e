//! Shared utility functions.

/// Shorten a task title for log lines without splitting a UTF-8 character.
///
/// Returns a sub-slice of the original string. Titles shorter than
/// `max_bytes` are returned unchanged. Only used for diagnostics; the
/// classifier always sees the full title.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
