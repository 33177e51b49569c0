//! Character and byte counting.

use serde::Serialize;

/// All three counts for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextCounts {
    /// Unicode scalar values, whitespace included.
    pub with_spaces: usize,
    /// Unicode scalar values that are not whitespace.
    pub without_spaces: usize,
    /// Length of the UTF-8 encoding.
    pub bytes: usize,
}

/// Number of characters (Unicode scalar values), including whitespace.
pub fn count_with_spaces(text: &str) -> usize {
    text.chars().count()
}

/// Number of characters, skipping anything `char::is_whitespace` accepts.
pub fn count_without_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Length of `text` in UTF-8 bytes.
///
/// ```
/// use qkit_core::metrics::count_bytes;
///
/// assert_eq!(count_bytes("Hello"), 5);
/// assert_eq!(count_bytes("안녕"), 6);
/// ```
pub fn count_bytes(text: &str) -> usize {
    text.len()
}

/// Compute every count in a single pass.
pub fn count(text: &str) -> TextCounts {
    let mut counts = TextCounts {
        bytes: text.len(),
        ..TextCounts::default()
    };
    for c in text.chars() {
        counts.with_spaces += 1;
        if !c.is_whitespace() {
            counts.without_spaces += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world() {
        assert_eq!(count_with_spaces("Hello World"), 11);
        assert_eq!(count_without_spaces("Hello World"), 10);
        assert_eq!(count_bytes("Hello World"), 11);
    }

    #[test]
    fn test_hangul_bytes() {
        assert_eq!(count_bytes("안녕"), 6);
        assert_eq!(count_with_spaces("안녕"), 2);
    }

    #[test]
    fn test_multibyte_widths() {
        assert_eq!(count_bytes("é"), 2);
        assert_eq!(count_bytes("漢"), 3);
        assert_eq!(count_bytes("😀"), 4);
        // One scalar value, even though it is a surrogate pair in UTF-16.
        assert_eq!(count_with_spaces("😀"), 1);
    }

    #[test]
    fn test_unicode_whitespace_is_skipped() {
        let text = "a\tb\nc\u{3000}d\u{00A0}e";
        assert_eq!(count_with_spaces(text), 9);
        assert_eq!(count_without_spaces(text), 5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count_with_spaces(""), 0);
        assert_eq!(count_without_spaces(""), 0);
        assert_eq!(count_bytes(""), 0);
        assert_eq!(count(""), TextCounts::default());
    }

    #[test]
    fn test_count_matches_individual_functions() {
        let text = "QKit 도구 모음\n";
        let counts = count(text);
        assert_eq!(counts.with_spaces, count_with_spaces(text));
        assert_eq!(counts.without_spaces, count_without_spaces(text));
        assert_eq!(counts.bytes, count_bytes(text));
    }
}
