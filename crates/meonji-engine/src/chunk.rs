use crate::text::{Side, pad, visible_width};
use std::fmt;

/// Horizontal alignment used when padding lines to a common width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A block of text lines that all have the same visible width.
///
/// Chunks are values: every operation returns a new chunk. The only way to
/// build one is through constructors that pad to a common width or through
/// merges of existing chunks, so the width invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chunk {
    lines: Vec<String>,
}

impl Chunk {
    /// Pad `lines` with spaces to the widest visible line.
    pub fn new<I, S>(lines: I, align: Align) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        let side = match align {
            Align::Left => Side::End,
            Align::Right => Side::Start,
        };

        let lines = lines
            .into_iter()
            .map(|line| {
                let missing = width - visible_width(&line);
                pad(&line, ' ', missing, side)
            })
            .collect();

        Self { lines }
    }

    /// Left-aligned chunk.
    pub fn left<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines, Align::Left)
    }

    /// Single-line chunk.
    pub fn line(s: impl Into<String>) -> Self {
        Self {
            lines: vec![s.into()],
        }
    }

    /// The chunk with no lines. Merging with it changes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Visible width shared by every line; 0 for the empty chunk.
    pub fn width(&self) -> usize {
        self.lines.first().map(|l| visible_width(l)).unwrap_or(0)
    }

    /// Place `other` to the right of `self`.
    ///
    /// The result has as many lines as the taller operand. Rows missing from
    /// the shorter one are filled with spaces of its width, so columns stay
    /// aligned. On equal heights `self` counts as the taller.
    pub fn merge(&self, other: &Chunk) -> Chunk {
        let rows = self.len().max(other.len());
        let left_blank = " ".repeat(self.width());
        let right_blank = " ".repeat(other.width());

        let lines = (0..rows)
            .map(|i| {
                let left = self.lines.get(i).unwrap_or(&left_blank);
                let right = other.lines.get(i).unwrap_or(&right_blank);
                format!("{}{}", left, right)
            })
            .collect();

        Chunk { lines }
    }

    /// Merge chunks left to right. An empty sequence yields the empty chunk.
    pub fn merge_all<I>(chunks: I) -> Chunk
    where
        I: IntoIterator<Item = Chunk>,
    {
        chunks
            .into_iter()
            .reduce(|acc, next| acc.merge(&next))
            .unwrap_or_default()
    }

    /// Lines joined by newlines, with a trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.lines.join("\n"))
    }
}
