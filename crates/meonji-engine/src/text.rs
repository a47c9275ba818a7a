use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").unwrap());

/// Which end of a string padding goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

/// Remove ANSI color/style escape sequences.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(s, "")
}

/// Number of characters a terminal shows for `s`, ignoring escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Add `n` copies of `ch` to one end of `s`.
pub fn pad(s: &str, ch: char, n: usize, side: Side) -> String {
    let fill: String = std::iter::repeat_n(ch, n).collect();
    match side {
        Side::Start => fill + s,
        Side::End => format!("{}{}", s, fill),
    }
}
