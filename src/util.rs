//! Utility functions for text measurement.

use unicode_width::UnicodeWidthStr;

/// Pads a string with trailing spaces to a display width.
///
/// Uses Unicode width calculations, so wide characters count as two
/// columns. Strings already at or past `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use richline::pad_to_width;
///
/// assert_eq!(pad_to_width("INFO:", 6), "INFO: ");
/// assert_eq!(pad_to_width("DEBUG:", 6), "DEBUG:");
/// assert_eq!(pad_to_width("日本", 6), "日本  ");
/// ```
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + width - current);
    result.push_str(s);
    result.push_str(&" ".repeat(width - current));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_short() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_pad_to_width_exact_fit() {
        assert_eq!(pad_to_width("abcd", 4), "abcd");
    }

    #[test]
    fn test_pad_to_width_never_truncates() {
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_pad_to_width_empty() {
        assert_eq!(pad_to_width("", 3), "   ");
        assert_eq!(pad_to_width("", 0), "");
    }

    #[test]
    fn test_pad_to_width_wide_chars() {
        assert_eq!(pad_to_width("日", 3), "日 ");
    }
}
