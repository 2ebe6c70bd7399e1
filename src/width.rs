//! Display width of code points.
//!
//! Widths follow the East-Asian width classes: narrow, halfwidth and neutral
//! code points take one column, while wide, fullwidth and ambiguous ones take
//! two. Ambiguous characters count as wide, which is how CJK terminals render
//! them. Non-printable code points take no columns and are never stored in a
//! pending line.
//!
//! Width lookups use the `unicode-width` crate; general categories come from
//! `unicode-general-category`.

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_width::UnicodeWidthChar;

/// Zero-width marks whose East-Asian width class is Ambiguous.
const AMBIGUOUS_MARKS: &[(char, char)] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{FE00}', '\u{FE0F}'),
    ('\u{E0100}', '\u{E01EF}'),
];

/// Return `true` if `c` occupies at least one terminal column.
///
/// Letters, marks, numbers, punctuation, symbols and the ASCII space are
/// printable. Other separators, controls, format, private-use, surrogate and
/// unassigned code points are not.
#[must_use]
pub fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
                | GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
        )
}

/// Display width of a single code point: 0, 1 or 2 columns.
///
/// # Examples
///
/// ```
/// use linebreak::rune_width;
///
/// assert_eq!(rune_width('a'), 1);
/// assert_eq!(rune_width('あ'), 2);
/// assert_eq!(rune_width('ｱ'), 1);
/// assert_eq!(rune_width('\u{0002}'), 0);
/// ```
#[must_use]
pub fn rune_width(c: char) -> usize {
    if !is_printable(c) {
        return 0;
    }
    match c.width_cjk() {
        Some(2) => 2,
        // `unicode-width` reports combining marks as zero columns whatever
        // their East-Asian class.
        Some(0) if AMBIGUOUS_MARKS.iter().any(|&(lo, hi)| (lo..=hi).contains(&c)) => 2,
        _ => 1,
    }
}

/// Sum of [`rune_width`] over every code point of `text`.
///
/// # Examples
///
/// ```
/// use linebreak::text_width;
///
/// assert_eq!(text_width("abc"), 3);
/// assert_eq!(text_width("あいう"), 6);
/// ```
#[must_use]
pub fn text_width(text: &str) -> usize { text.chars().map(rune_width).sum() }

/// East-Asian Wide or Fullwidth.
///
/// Ambiguous code points are excluded: they are drawn wide but do not get the
/// break-on-either-side treatment of CJK ideographs.
pub(crate) fn is_wide(c: char) -> bool { c.width() == Some(2) }
