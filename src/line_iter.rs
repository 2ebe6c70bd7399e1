//! Line-by-line iteration over text within a column budget.
//!
//! [`LineIter`] pulls one code point at a time from its input, classifies it
//! with [`LboState`](crate::LboState), and keeps the not-yet-emitted part of
//! the current line in a fixed-capacity buffer. A line is returned when the
//! next code point would overflow the budget, when a hard break is met, or
//! when the input runs out.
//!
//! Two running widths are kept for the buffered text: `widths[0]` covers the
//! text up to the latest break opportunity and `widths[1]` the text after it.
//! Their sum is always the display width of the buffer.

use std::{
    iter::{FusedIterator, Peekable},
    str::Chars,
};

use tracing::{debug, trace};

use crate::{
    lbo::{Lbo, LboState, is_hard_break},
    rune_buffer::RuneBuffer,
    width::{rune_width, text_width},
};

/// Breaks text into lines no wider than a given number of columns.
///
/// The iterator yields every line, including empty ones produced by blank
/// lines in the input. Empty text yields a single empty line. The indentation
/// set with [`LineIter::set_indent`] is prefixed to every non-empty line
/// returned after the call; it also shrinks the budget of text that is already
/// buffered.
///
/// # Examples
///
/// ```
/// use linebreak::LineIter;
///
/// let mut iter = LineIter::new("1234567890 abcdefghij", 15);
/// assert_eq!(iter.next().as_deref(), Some("1234567890"));
/// iter.set_indent("  ");
/// assert_eq!(iter.next().as_deref(), Some("  abcdefghij"));
/// assert!(!iter.has_next());
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct LineIter<'a> {
    chars: Peekable<Chars<'a>>,
    buffer: RuneBuffer,
    widths: [usize; 2],
    lbo_pos: usize,
    lbo: LboState,
    line_width: usize,
    indent: String,
    indent_width: usize,
    soft_wrapped: bool,
    exhausted: bool,
}

impl<'a> LineIter<'a> {
    /// Create an iterator over `text` producing lines of at most
    /// `line_width` columns, with no indentation.
    ///
    /// A budget narrower than a single code point degrades to one code point
    /// per line.
    #[must_use]
    pub fn new(text: &'a str, line_width: usize) -> Self {
        Self {
            chars: text.chars().peekable(),
            buffer: RuneBuffer::new(line_width.max(1)),
            widths: [0, 0],
            lbo_pos: 0,
            lbo: LboState::default(),
            line_width,
            indent: String::new(),
            indent_width: 0,
            soft_wrapped: false,
            exhausted: false,
        }
    }

    /// Restart on `text`, keeping the line width and the indentation.
    pub fn init(&mut self, text: &'a str) {
        self.chars = text.chars().peekable();
        self.buffer.clear();
        self.widths = [0, 0];
        self.lbo_pos = 0;
        self.lbo.reset();
        self.soft_wrapped = false;
        self.exhausted = false;
    }

    /// Use `indent` as the prefix of every non-empty line returned from now on.
    pub fn set_indent(&mut self, indent: impl Into<String>) {
        self.indent = indent.into();
        self.indent_width = text_width(&self.indent);
    }

    /// The current indentation.
    #[must_use]
    pub fn indent(&self) -> &str { &self.indent }

    /// The configured line width, indentation included.
    #[must_use]
    pub fn line_width(&self) -> usize { self.line_width }

    /// Return `true` until the final line has been returned.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.exhausted && !(self.soft_wrapped && self.buffer.is_empty() && self.rest_is_blank())
    }

    /// Whether the unread input would add nothing to the buffer.
    fn rest_is_blank(&self) -> bool {
        self.chars
            .clone()
            .all(|c| !is_hard_break(c) && (c.is_whitespace() || rune_width(c) == 0))
    }

    /// Columns left for text once the indentation is placed.
    fn budget(&self) -> usize { self.line_width.saturating_sub(self.indent_width) }

    fn store(&mut self, r: char, rune_w: usize) {
        if rune_w == 0 {
            return;
        }
        if !self.buffer.add(&[r]) {
            panic!(
                "pending line overflow: {} code points buffered, capacity {}, widths {:?}",
                self.buffer.len(),
                self.buffer.capacity(),
                self.widths,
            );
        }
    }

    /// The first `end` buffered code points as an indented line, without
    /// trailing whitespace.
    fn line(&self, end: usize) -> String {
        let runes = trim_end(&self.buffer.active()[..end]);
        if runes.is_empty() {
            return String::new();
        }
        let mut line = String::with_capacity(self.indent.len() + runes.len());
        line.push_str(&self.indent);
        line.extend(runes);
        line
    }

    fn reset_line(&mut self) {
        self.buffer.clear();
        self.widths = [0, 0];
        self.lbo_pos = 0;
    }

    /// Split text that was accepted under a wider budget.
    ///
    /// Walks back from the end of the buffer until the prefix fits, always
    /// keeping at least one code point in the emitted line.
    fn reflow(&mut self) -> Option<String> {
        let budget = self.budget();
        if self.widths[0] <= budget || self.buffer.is_empty() {
            return None;
        }

        let runes = self.buffer.active();
        let mut width = self.widths[0] + self.widths[1];
        let mut end = runes.len();
        while end > 1 && width > budget {
            end -= 1;
            width -= rune_width(runes[end]);
        }
        let skip = runes[end..]
            .iter()
            .take_while(|c| c.is_whitespace())
            .count();
        let skipped: usize = runes[end..end + skip].iter().map(|&c| rune_width(c)).sum();

        let line = self.line(end);
        debug!(
            budget,
            committed = self.widths[0],
            split = end,
            "reflowing buffered text after indent change"
        );
        self.buffer.shift(end + skip);
        self.widths[0] = self.widths[0].saturating_sub(width + skipped);
        self.lbo_pos = self.lbo_pos.saturating_sub(end + skip);
        self.soft_wrapped = true;
        trace!(%line, reason = "reflow", "line");
        Some(line)
    }

    /// Emit a line because `r` does not fit, and start the next line.
    fn break_line(&mut self, r: char, rune_w: usize, kind: Lbo) -> String {
        let len = self.buffer.len();
        let budget = self.budget();
        let fits = self.widths[0] + self.widths[1] <= budget;

        if self.lbo.prev() == Lbo::Before
            && self.lbo_pos > 0
            && (self.widths[1] + rune_w <= budget || !fits)
        {
            // Keep the opening run together with `r`.
            let line = self.line(self.lbo_pos);
            self.buffer.shift(self.lbo_pos);
            self.store(r, rune_w);
            self.widths = [self.widths[1] + rune_w, 0];
            self.lbo_pos = self.buffer.len();
            return line;
        }

        let mut pos = self.lbo_pos;
        if matches!(kind, Lbo::Before | Lbo::Both | Lbo::Space) || pos == 0 {
            pos = len;
        } else if self.widths[1] + rune_w > budget && fits {
            // The carried tail and `r` would not fit on the next line.
            pos = len;
        }
        let carried = if pos < len { self.widths[1] } else { 0 };

        let line = self.line(pos);
        self.buffer.shift(pos);

        match kind {
            Lbo::Space => {
                self.widths = [0, 0];
                self.lbo_pos = 0;
            }
            Lbo::Before | Lbo::Both => {
                self.store(r, rune_w);
                self.widths = [rune_w, 0];
                self.lbo_pos = 0;
            }
            Lbo::After => {
                self.store(r, rune_w);
                self.widths = [carried + rune_w, 0];
                self.lbo_pos = self.buffer.len();
            }
            Lbo::Never | Lbo::Break => {
                self.store(r, rune_w);
                self.widths = [carried + rune_w, 0];
                self.lbo_pos = 0;
            }
        }
        line
    }

    /// Append `r` to the current line and move the break marker.
    fn accept(&mut self, r: char, rune_w: usize, kind: Lbo) {
        let start = self.buffer.len();
        self.store(r, rune_w);

        match kind {
            Lbo::Before if self.lbo.prev() == Lbo::Before => {
                self.widths[1] += rune_w;
            }
            Lbo::Before | Lbo::Both => {
                self.lbo_pos = start;
                self.widths[0] += self.widths[1];
                self.widths[1] = rune_w;
            }
            Lbo::After | Lbo::Space => {
                self.lbo_pos = self.buffer.len();
                self.widths[0] += self.widths[1] + rune_w;
                self.widths[1] = 0;
            }
            Lbo::Never | Lbo::Break => {
                self.widths[1] += rune_w;
            }
        }
    }
}

impl Iterator for LineIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        if let Some(line) = self.reflow() {
            return Some(line);
        }

        let budget = self.budget();
        while let Some(r) = self.chars.next() {
            let kind = self.lbo.classify(r);

            if kind == Lbo::Break {
                if r == '\r' {
                    self.chars.next_if_eq(&'\n');
                }
                self.lbo.reset();
                if self.soft_wrapped && self.buffer.is_empty() {
                    // The line was already ended by a soft wrap.
                    self.soft_wrapped = false;
                    continue;
                }
                let line = self.line(self.buffer.len());
                self.reset_line();
                self.soft_wrapped = false;
                trace!(%line, reason = "hard-break", "line");
                return Some(line);
            }

            if kind == Lbo::Space && self.buffer.is_empty() {
                continue;
            }

            let rune_w = rune_width(r);
            if self.widths[0] + self.widths[1] + rune_w > budget && !self.buffer.is_empty() {
                let line = self.break_line(r, rune_w, kind);
                self.soft_wrapped = true;
                trace!(%line, reason = "overflow", "line");
                return Some(line);
            }
            self.accept(r, rune_w, kind);
        }

        self.exhausted = true;
        if self.soft_wrapped && self.buffer.is_empty() {
            // The last soft wrap already returned everything.
            return None;
        }
        let line = self.line(self.buffer.len());
        self.reset_line();
        trace!(%line, reason = "eof", "line");
        Some(line)
    }
}

impl FusedIterator for LineIter<'_> {}

/// `runes` without trailing whitespace.
fn trim_end(runes: &[char]) -> &[char] {
    let end = runes
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(0, |i| i + 1);
    &runes[..end]
}
