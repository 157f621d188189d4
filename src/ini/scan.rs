//! Low-level text scanning helpers for the parse driver.

/// Returns the byte index of the first character in `s` that is either one
/// of `delims` or the start of an inline comment, or `s.len()` if neither
/// occurs.
///
/// `inline_prefixes` is `Some` only when inline comments are enabled. An
/// inline comment character registers only when the previous character was
/// whitespace, so a prefix character embedded in a value (`path=/a;b`)
/// does not terminate the scan.
pub(super) fn find_char_or_comment(s: &str, delims: &str, inline_prefixes: Option<&str>) -> usize {
    let mut was_space = false;
    for (i, c) in s.char_indices() {
        if delims.contains(c) {
            return i;
        }
        if let Some(prefixes) = inline_prefixes {
            if was_space && prefixes.contains(c) {
                return i;
            }
        }
        was_space = c.is_ascii_whitespace();
    }
    s.len()
}

/// Truncates `s` to at most `max` bytes, rounding down to a UTF-8
/// character boundary so the result is always valid.
pub(super) fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
