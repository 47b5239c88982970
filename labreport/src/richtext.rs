//! The display-side collaborator for formatted description lines: gives the
//! two emphasis tags visual meaning and leaves every other byte literal.

use reportdom::{Span, TextStyle};

/// Split a formatted line into styled spans: `<strong>…</strong>` runs are
/// bold, `<em>…</em>` runs italic, everything else verbatim plain text.
/// An unclosed emphasis tag displays literally.
pub fn spans(line: &str) -> Vec<Span> {
    let mut out = Vec::new();
    emit(line, TextStyle::new(), &mut out);
    out
}

struct Pair {
    open: &'static str,
    close: &'static str,
    apply: fn(TextStyle) -> TextStyle,
}

const PAIRS: [Pair; 2] = [
    Pair {
        open: "<strong>",
        close: "</strong>",
        apply: TextStyle::bold,
    },
    Pair {
        open: "<em>",
        close: "</em>",
        apply: TextStyle::italic,
    },
];

fn emit(text: &str, base: TextStyle, out: &mut Vec<Span>) {
    let mut rest = text;

    loop {
        // Earliest complete pair wins; ties cannot happen (distinct openers).
        let next = PAIRS
            .iter()
            .filter_map(|pair| find_pair(rest, pair).map(|found| (pair, found)))
            .min_by_key(|(_, found)| found.0);

        let Some((pair, (start, inner_end, after))) = next else {
            if !rest.is_empty() {
                out.push(Span::styled(rest, base));
            }
            return;
        };

        if start > 0 {
            out.push(Span::styled(&rest[..start], base));
        }

        // Recurse so bold and italic can nest.
        emit(&rest[start + pair.open.len()..inner_end], (pair.apply)(base), out);

        rest = &rest[after..];
    }
}

/// Byte offsets of the next `open…close` pair: (start of opener, start of
/// closer, end of closer). None when the opener never closes.
fn find_pair(text: &str, pair: &Pair) -> Option<(usize, usize, usize)> {
    let start = text.find(pair.open)?;
    let inner_start = start + pair.open.len();
    let close_rel = text[inner_start..].find(pair.close)?;
    let inner_end = inner_start + close_rel;
    Some((start, inner_end, inner_end + pair.close.len()))
}
