//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use assert_cmd::{Command, assert::Assert};
use linebreak::{Lbo, LboState, text_width};

/// Run the `linebreak` binary with `args`, feeding `input` on stdin.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Assert {
    Command::cargo_bin("linebreak")
        .expect("Failed to create cargo command for linebreak")
        .args(args)
        .write_stdin(input)
        .assert()
}

/// Assert every line fits `width`, allowing a lone oversized code point.
pub fn assert_width_bound(lines: &[String], indent: &str, width: usize) {
    for line in lines {
        let body = line.strip_prefix(indent).unwrap_or(line);
        let single = body.chars().count() == 1;
        assert!(
            text_width(line) <= width || single,
            "line {line:?} is wider than {width} columns"
        );
    }
}

/// Assert no line starts or ends with collapsible whitespace.
pub fn assert_trimmed(lines: &[String], indent: &str) {
    for line in lines {
        let body = line.strip_prefix(indent).unwrap_or(line);
        let mut state = LboState::default();
        let kinds: Vec<Lbo> = body.chars().map(|c| state.classify(c)).collect();
        assert_ne!(kinds.first(), Some(&Lbo::Space), "leading space in {line:?}");
        assert_ne!(kinds.last(), Some(&Lbo::Space), "trailing space in {line:?}");
    }
}

/// The non-whitespace code points of `text`, in order.
pub fn visible(text: &str) -> String { text.chars().filter(|c| !c.is_whitespace()).collect() }
