//! Line-break opportunity classification.
//!
//! Each code point is assigned an [`Lbo`] category describing where, relative
//! to it, a line may be broken. Straight quotes are paired: the first `"` or
//! `'` opens a quotation and the next one of the same kind closes it, so the
//! classifier carries a small amount of state in [`LboState`].

use crate::width::is_wide;

/// Where a line break may fall relative to a code point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Lbo {
    /// No break on either side.
    #[default]
    Never,
    /// A break may fall immediately before this code point.
    Before,
    /// A break may fall immediately after this code point.
    After,
    /// A break may fall on either side.
    Both,
    /// Mandatory line terminator; consumed and never emitted.
    Break,
    /// Collapsible whitespace.
    Space,
}

/// Code points that must not end a line.
const BEFORES: &[char] = &[
    '(', '[', '{', '¡', '¿', '«', '‘', '‚', '“', '„', '‹', '〈', '《', '「', '『', '【', '〔',
    '〖', '〘', '〚', '〝', '（', '［', '｛', '｟', '｢',
];

/// Code points that must not start a line.
const AFTERS: &[char] = &[
    ',', '.', ':', ';', '!', '?', ')', ']', '}', '-', '»', '’', '”', '›', '‐', '‥', '…', '、',
    '。', '〉', '》', '」', '』', '】', '〕', '〗', '〙', '〛', '〞', '〟', '々', '〻', 'ー', 'ぁ',
    'ぃ', 'ぅ', 'ぇ', 'ぉ', 'っ', 'ゃ', 'ゅ', 'ょ', 'ゎ', 'ゕ', 'ゖ', 'ゝ', 'ゞ', 'ァ', 'ィ', 'ゥ',
    'ェ', 'ォ', 'ッ', 'ャ', 'ュ', 'ョ', 'ヮ', 'ヵ', 'ヶ', '・', 'ヽ', 'ヾ', '！', '）', '，', '．',
    '：', '；', '？', '］', '｝', '｠', '｡', '｣', '､', '･',
];

/// Return `true` for code points that force a line to end.
///
/// `'\r'` is included; the caller folds a following `'\n'` into the same
/// break.
#[must_use]
pub fn is_hard_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Classification state carried from one code point to the next.
///
/// Each quote counter is `0` while that quote kind is closed. An opening quote
/// stores one more than the other kind's counter, so the larger counter marks
/// the quote that was opened last.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LboState {
    kind: Lbo,
    prev: Lbo,
    open_quot: u8,
    open_apos: u8,
}

impl LboState {
    /// Category of the most recently classified code point.
    #[must_use]
    pub fn kind(&self) -> Lbo { self.kind }

    /// Category of the code point classified before the latest one.
    #[must_use]
    pub fn prev(&self) -> Lbo { self.prev }

    /// Forget all quote nesting and previous categories.
    pub fn reset(&mut self) { *self = Self::default(); }

    /// Classify `c`, updating the quote counters and the previous category.
    ///
    /// Precedence is fixed: quotes first, then hard breaks, the opening and
    /// closing punctuation tables, whitespace, and finally wide characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use linebreak::{Lbo, LboState};
    ///
    /// let mut state = LboState::default();
    /// assert_eq!(state.classify('"'), Lbo::Before);
    /// assert_eq!(state.classify('a'), Lbo::Never);
    /// assert_eq!(state.classify('"'), Lbo::After);
    /// assert_eq!(state.prev(), Lbo::Never);
    /// ```
    pub fn classify(&mut self, c: char) -> Lbo {
        self.prev = self.kind;
        self.kind = match c {
            '"' => toggle_quote(&mut self.open_quot, &mut self.open_apos),
            '\'' => toggle_quote(&mut self.open_apos, &mut self.open_quot),
            c if is_hard_break(c) => Lbo::Break,
            c if BEFORES.contains(&c) => Lbo::Before,
            c if AFTERS.contains(&c) => Lbo::After,
            c if c.is_whitespace() => Lbo::Space,
            c if is_wide(c) => Lbo::Both,
            _ => Lbo::Never,
        };
        self.kind
    }
}

/// Open or close the quote tracked by `this`.
///
/// Closing a quote also closes a quote of the other kind that was opened
/// inside it.
fn toggle_quote(this: &mut u8, other: &mut u8) -> Lbo {
    if *this == 0 {
        *this = other.saturating_add(1);
        return Lbo::Before;
    }
    if *other > *this {
        *other = 0;
    }
    *this = 0;
    Lbo::After
}
