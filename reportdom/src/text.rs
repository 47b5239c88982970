use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::element::Span;
use crate::types::{TextAlign, TextStyle};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Total cell width of a run of spans on one line.
pub fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.text)).sum()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width - 1;

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// One styled fragment of a word. A word may cross span boundaries
/// ("<strong>sugars</strong>," is one word of two fragments) and must not
/// break at the style change.
#[derive(Debug, Clone)]
struct Fragment {
    text: String,
    style: TextStyle,
}

#[derive(Debug, Clone, Default)]
struct Word {
    fragments: Vec<Fragment>,
    width: usize,
}

impl Word {
    fn push(&mut self, ch: char, style: TextStyle) {
        match self.fragments.last_mut() {
            Some(frag) if frag.style == style => frag.text.push(ch),
            _ => self.fragments.push(Fragment {
                text: ch.to_string(),
                style,
            }),
        }
        self.width += char_width(ch);
    }

    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Word-wrap a run of styled spans to the given width.
///
/// Whitespace between words collapses to a single space; words wider than the
/// line (bare URLs) are split at character boundaries. Each output line is a
/// fresh span run carrying the original styles.
pub fn wrap_spans(spans: &[Span], max_width: usize) -> Vec<Vec<Span>> {
    if max_width == 0 {
        return vec![];
    }

    let words = collect_words(spans);
    if words.is_empty() {
        return vec![Vec::new()];
    }

    let mut lines: Vec<Vec<Span>> = Vec::new();
    let mut line: Vec<Span> = Vec::new();
    let mut line_width = 0usize;

    for word in words {
        if word.width > max_width {
            // Flush the current line, then hard-split the word.
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            let mut parts = split_word(&word, max_width);
            let last = parts.pop();
            lines.extend(parts.into_iter().map(word_to_spans));
            if let Some(last) = last {
                line_width = last.width;
                line = word_to_spans(last);
            }
            continue;
        }

        let space = usize::from(!line.is_empty());
        if line_width + space + word.width > max_width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        } else if space == 1 {
            line.push(Span::new(" "));
            line_width += 1;
        }

        line_width += word.width;
        line.extend(word_to_spans(word));
    }

    if !line.is_empty() {
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(Vec::new());
    }

    lines
}

/// Plain-text convenience over [`wrap_spans`].
pub fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    wrap_spans(&[Span::new(s)], max_width)
        .into_iter()
        .map(|line| line.into_iter().map(|span| span.text).collect())
        .collect()
}

fn collect_words(spans: &[Span]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();

    for span in spans {
        for ch in span.text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                current.push(ch, span.style);
            }
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn split_word(word: &Word, max_width: usize) -> Vec<Word> {
    let mut parts = Vec::new();
    let mut current = Word::default();

    for frag in &word.fragments {
        for ch in frag.text.chars() {
            let w = char_width(ch);
            if current.width + w > max_width && !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            current.push(ch, frag.style);
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

fn word_to_spans(word: Word) -> Vec<Span> {
    word.fragments
        .into_iter()
        .map(|frag| Span::styled(frag.text, frag.style))
        .collect()
}
