//! Property tests for [`LineIter`] layout guarantees.
//!
//! This module checks, over generated Latin and East-Asian text:
//! - Every line fits the requested width
//! - No line starts or ends with collapsible whitespace
//! - Visible characters survive in their original order
//! - `has_next` agrees with `next`
//! - Changing the indentation between lines keeps the width bound and the
//!   visible text
//! - Paired quotes stay attached to the words they enclose

use linebreak::{LineIter, rune_width, spaces, text_width, wrap};
use proptest::prelude::*;

mod prelude;
use prelude::*;

const TEXT: &str = "[a-z ,.()\"'「」、。東京あい\n\t-]{0,160}";

/// Words and short phrases, each plain or wrapped in one kind of quote.
fn quoted_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(("[a-z]{1,6}( [a-z]{1,6}){0,2}", 0u8..3), 1..30).prop_map(
        |phrases| {
            phrases
                .into_iter()
                .map(|(phrase, quote)| match quote {
                    1 => format!("\"{phrase}\""),
                    2 => format!("'{phrase}'"),
                    _ => phrase,
                })
                .collect::<Vec<_>>()
                .join(" ")
        },
    )
}

fn is_quote(c: char) -> bool { c == '"' || c == '\'' }

proptest! {
    #[test]
    fn lines_fit_the_width(text in TEXT, width in 1usize..40) {
        let lines = wrap(&text, width);
        assert_width_bound(&lines, "", width);
    }

    #[test]
    fn lines_are_trimmed(text in TEXT, width in 1usize..40) {
        let lines = wrap(&text, width);
        assert_trimmed(&lines, "");
    }

    #[test]
    fn visible_text_is_preserved(text in TEXT, width in 0usize..40) {
        let lines = wrap(&text, width);
        prop_assert_eq!(visible(&lines.concat()), visible(&text));
    }

    #[test]
    fn has_next_matches_next(text in TEXT, width in 0usize..20) {
        let mut iter = LineIter::new(&text, width);
        while iter.has_next() {
            prop_assert!(iter.next().is_some());
        }
        prop_assert_eq!(iter.next(), None);
    }

    #[test]
    fn indent_changes_keep_width_and_text(
        text in "\\PC{0,200}",
        width in 0usize..30,
        indents in proptest::collection::vec(0isize..40, 1..20),
    ) {
        let mut iter = LineIter::new(&text, width);
        let mut indents = indents.iter().cycle();
        let mut bodies = String::new();
        while let Some(line) = iter.next() {
            if !line.is_empty() {
                let body = line.strip_prefix(iter.indent());
                prop_assert!(body.is_some(), "line {:?} lacks indent", line);
                let body = body.unwrap_or_default();
                prop_assert!(
                    text_width(&line) <= width || body.chars().count() == 1,
                    "line {:?} is wider than {} columns",
                    line,
                    width
                );
                bodies.push_str(body);
            }
            if let Some(&indent) = indents.next() {
                iter.set_indent(spaces(indent));
            }
        }
        prop_assert_eq!(iter.next(), None);
        let stored: String = text
            .chars()
            .filter(|&c| !c.is_whitespace() && rune_width(c) > 0)
            .collect();
        prop_assert_eq!(visible(&bodies), stored);
    }

    #[test]
    fn quotes_stay_with_their_words(text in quoted_text(), width in 10usize..40) {
        let lines = wrap(&text, width);
        for line in &lines {
            let chars: Vec<char> = line.chars().collect();
            let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
                continue;
            };
            let alone = chars.len() == 1;
            prop_assert!(
                !(is_quote(last) && (alone || chars[chars.len() - 2] == ' ')),
                "opening quote ends line {:?}",
                line
            );
            prop_assert!(
                !(is_quote(first) && (alone || chars[1] == ' ')),
                "closing quote starts line {:?}",
                line
            );
        }
        prop_assert_eq!(visible(&lines.concat()), visible(&text));
    }
}
