// Utility functions for scanning loosely formatted text

/// Returns the text between the first `open` and the last `close`.
/// `None` when either delimiter is missing or `close` comes before `open`.
pub fn substring_between(s: &str, open: char, close: char) -> Option<&str> {
    let start = s.find(open)? + open.len_utf8();
    let end = s.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&s[start..end])
}

/// Keeps only the ASCII digits of `s`.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Cuts `s` to at most `max` characters for log output.
pub fn truncate_for_log(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
