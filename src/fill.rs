//! Whole-text wrapping built on [`LineIter`].
//!
//! These helpers cover the common case of wrapping a document with one
//! indentation for the first line and another for the rest.

use crate::{LineIter, term::TermSize};

/// Layout settings for [`wrap_with`] and [`fill`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WrapOptions {
    /// Total line width in columns, indentation included.
    pub width: usize,
    /// Prefix of the first line.
    pub indent: String,
    /// Prefix of every line after the first.
    pub subsequent_indent: String,
}

impl WrapOptions {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            indent: String::new(),
            subsequent_indent: String::new(),
        }
    }

    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn subsequent_indent(mut self, indent: impl Into<String>) -> Self {
        self.subsequent_indent = indent.into();
        self
    }
}

impl Default for WrapOptions {
    fn default() -> Self { Self::new(TermSize::default().cols) }
}

/// Wrap `text` to `width` columns without indentation.
///
/// # Examples
///
/// ```
/// use linebreak::wrap;
///
/// assert_eq!(wrap("1234567890 abcdefghij", 12), ["1234567890", "abcdefghij"]);
/// ```
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> { wrap_with(text, &WrapOptions::new(width)) }

/// Wrap `text` using the widths and indents in `opts`.
///
/// # Examples
///
/// ```
/// use linebreak::{WrapOptions, wrap_with};
///
/// let opts = WrapOptions::new(12).indent("- ").subsequent_indent("  ");
/// assert_eq!(
///     wrap_with("first item wraps here", &opts),
///     ["- first item", "  wraps here"],
/// );
/// ```
#[must_use]
pub fn wrap_with(text: &str, opts: &WrapOptions) -> Vec<String> {
    let mut iter = LineIter::new(text, opts.width);
    iter.set_indent(opts.indent.as_str());
    let mut lines = Vec::new();
    while let Some(line) = iter.next() {
        if lines.is_empty() {
            iter.set_indent(opts.subsequent_indent.as_str());
        }
        lines.push(line);
    }
    lines
}

/// Wrap a document and join the lines, ending with a single newline.
///
/// One trailing line terminator in `text` is dropped first so that it does not
/// turn into an empty last line.
#[must_use]
pub fn fill(text: &str, opts: &WrapOptions) -> String {
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    let mut out = wrap_with(body, opts).join("\n");
    out.push('\n');
    out
}
