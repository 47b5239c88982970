//! Description formatter: splits raw description text into renderable block
//! units and rewrites the two supported inline tag pairs.
//!
//! The input is author-controlled and trusted. Nothing here escapes or
//! sanitizes; markup outside the two emphasis pairs passes through
//! byte-for-byte. Feeding this user-supplied text would require a
//! sanitization boundary that deliberately does not exist.

use std::str::Split;

/// One renderable unit of a description, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A line of content after the inline substitution pass.
    Paragraph(String),
    /// A whitespace-only line: vertical space, not a paragraph.
    Break,
}

/// Lazy block iterator over a description. Pure: the same input always
/// yields the same blocks, in input order.
pub fn blocks(description: &str) -> Blocks<'_> {
    Blocks {
        lines: description.split('\n'),
    }
}

pub struct Blocks<'a> {
    lines: Split<'a, char>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let line = self.lines.next()?;
        if line.trim().is_empty() {
            Some(Block::Break)
        } else {
            Some(Block::Paragraph(rewrite_inline(line)))
        }
    }
}

/// One substitution pass over a line: `<b>…</b>` becomes
/// `<strong>…</strong>` and `<i>…</i>` becomes `<em>…</em>`.
///
/// Pairing is non-greedy (each opener takes the nearest closer), applied
/// once rather than to a fixpoint, and an opener without a closer stays
/// literal. Everything else in the line is untouched.
pub fn rewrite_inline(line: &str) -> String {
    let bold = replace_pairs(line, "<b>", "</b>", "<strong>", "</strong>");
    replace_pairs(&bold, "<i>", "</i>", "<em>", "</em>")
}

fn replace_pairs(
    input: &str,
    open: &str,
    close: &str,
    new_open: &str,
    new_close: &str,
) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            // Unmatched opener: the remainder is literal text.
            break;
        };

        out.push_str(&rest[..start]);
        out.push_str(new_open);
        out.push_str(&after_open[..end]);
        out.push_str(new_close);
        rest = &after_open[end + close.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_pairs_stay_separate() {
        assert_eq!(
            rewrite_inline("<b>a</b><b>b</b>"),
            "<strong>a</strong><strong>b</strong>"
        );
    }

    #[test]
    fn dangling_closer_is_literal() {
        assert_eq!(rewrite_inline("x</b>y"), "x</b>y");
    }

    #[test]
    fn empty_pair() {
        assert_eq!(rewrite_inline("<i></i>"), "<em></em>");
    }
}
