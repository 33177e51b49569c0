//! Full-width ⇄ half-width conversion.
//!
//! The Unicode "Halfwidth and Fullwidth Forms" block mirrors printable ASCII
//! (`!` through `~`) at a fixed distance of `0xFEE0`, so conversion in either
//! direction is a single code-point shift. Characters outside the mirrored
//! band pass through untouched, including the ASCII space and the
//! ideographic space U+3000.

use std::ops::RangeInclusive;

/// Distance between a printable ASCII char and its full-width form.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Full-width forms of `!` through `~`.
const FULLWIDTH_BAND: RangeInclusive<char> = '\u{FF01}'..='\u{FF5E}';

/// Printable ASCII excluding space.
const HALFWIDTH_BAND: RangeInclusive<char> = '\u{0021}'..='\u{007E}';

/// Convert full-width characters to their half-width ASCII equivalents.
///
/// # Examples
///
/// ```
/// use qkit_core::width::to_half_width;
///
/// assert_eq!(to_half_width("１２３ＡＢＣ"), "123ABC");
/// assert_eq!(to_half_width("abc"), "abc");
/// ```
pub fn to_half_width(text: &str) -> String {
    text.chars().map(half_width_char).collect()
}

/// Convert printable ASCII characters to their full-width forms.
///
/// # Examples
///
/// ```
/// use qkit_core::width::to_full_width;
///
/// assert_eq!(to_full_width("123ABC"), "１２３ＡＢＣ");
/// ```
pub fn to_full_width(text: &str) -> String {
    text.chars().map(full_width_char).collect()
}

/// Half-width form of `c`, or `c` itself if it has none.
pub fn half_width_char(c: char) -> char {
    if FULLWIDTH_BAND.contains(&c) {
        shift(c, |cp| cp - FULLWIDTH_OFFSET)
    } else {
        c
    }
}

/// Full-width form of `c`, or `c` itself if it has none.
pub fn full_width_char(c: char) -> char {
    if HALFWIDTH_BAND.contains(&c) {
        shift(c, |cp| cp + FULLWIDTH_OFFSET)
    } else {
        c
    }
}

fn shift(c: char, f: impl Fn(u32) -> u32) -> char {
    // Both bands map onto assigned, non-surrogate code points.
    char::from_u32(f(c as u32)).unwrap_or(c)
}
