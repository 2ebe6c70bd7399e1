//! Terminal queries and indentation helpers.
//!
//! Nothing here shares state with [`LineIter`](crate::LineIter); callers use
//! these to pick a line width and to build indentation strings.

use terminal_size::{Height, Width, terminal_size};

/// Size of a terminal in character cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TermSize {
    pub cols: usize,
    pub rows: usize,
}

impl Default for TermSize {
    /// The classic 80×24 terminal.
    fn default() -> Self { Self { cols: 80, rows: 24 } }
}

/// Size of the terminal attached to standard output, or `defaults` when
/// standard output is not a terminal.
#[must_use]
pub fn term_size_or(defaults: TermSize) -> TermSize {
    match terminal_size() {
        Some((Width(cols), Height(rows))) if cols > 0 && rows > 0 => TermSize {
            cols: usize::from(cols),
            rows: usize::from(rows),
        },
        _ => defaults,
    }
}

/// [`term_size_or`] with the 80×24 fallback.
#[must_use]
pub fn term_size() -> TermSize { term_size_or(TermSize::default()) }

/// Column count of the terminal, 80 when unknown.
#[must_use]
pub fn term_cols() -> usize { term_size().cols }

/// A string of `count` ASCII spaces; negative counts give an empty string.
///
/// # Examples
///
/// ```
/// use linebreak::spaces;
///
/// assert_eq!(spaces(3), "   ");
/// assert_eq!(spaces(-1), "");
/// ```
#[must_use]
pub fn spaces(count: isize) -> String { " ".repeat(usize::try_from(count).unwrap_or(0)) }

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "")]
    #[case(1, " ")]
    #[case(4, "    ")]
    #[case(-5, "")]
    fn spaces_repeat(#[case] count: isize, #[case] expected: &str) {
        assert_eq!(spaces(count), expected);
    }

    #[test]
    fn default_size_is_eighty_by_twenty_four() {
        assert_eq!(TermSize::default(), TermSize { cols: 80, rows: 24 });
    }

    #[test]
    fn fallback_is_used_or_size_is_real() {
        let fallback = TermSize { cols: 7, rows: 3 };
        let size = term_size_or(fallback);
        assert!(size == fallback || (size.cols > 0 && size.rows > 0));
        assert!(term_cols() > 0);
    }
}
