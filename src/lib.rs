//! Break text into display lines that fit a column budget.
//!
//! [`LineIter`] returns one line at a time. It measures East-Asian wide
//! characters as two columns, collapses whitespace at line boundaries, keeps
//! opening brackets and quotes with the text that follows them and closing
//! punctuation with the text before it, and prefixes an indentation that may
//! change between lines.
//!
//! ```
//! use linebreak::LineIter;
//!
//! let text = "Go is a new language. Although it borrows ideas from existing languages, \
//!             it has unusual properties.";
//! let mut iter = LineIter::new(text, 30);
//! let first = iter.next().unwrap();
//! assert_eq!(first, "Go is a new language. Although");
//!
//! iter.set_indent("  ");
//! let rest: Vec<String> = iter.collect();
//! assert_eq!(
//!     rest,
//!     ["  it borrows ideas from", "  existing languages, it has", "  unusual properties."],
//! );
//! ```

pub mod fill;
pub mod io;
mod lbo;
mod line_iter;
mod rune_buffer;
pub mod term;
mod width;

pub use fill::{WrapOptions, fill, wrap, wrap_with};
pub use io::rewrite;
pub use lbo::{Lbo, LboState, is_hard_break};
pub use line_iter::LineIter;
pub use term::{TermSize, spaces, term_cols, term_size, term_size_or};
pub use width::{is_printable, rune_width, text_width};
