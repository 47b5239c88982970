use labreport::markup::{blocks, rewrite_inline, Block};
use labreport::richtext;
use reportdom::{Span, TextStyle};

// ============================================================================
// Inline substitution pass
// ============================================================================

#[test]
fn test_bold_and_italic_rewritten_in_place() {
    let out: Vec<Block> = blocks("<b>x</b> and <i>y</i>").collect();
    assert_eq!(
        out,
        vec![Block::Paragraph(
            "<strong>x</strong> and <em>y</em>".to_string()
        )]
    );
}

#[test]
fn test_multiple_spans_are_non_greedy() {
    assert_eq!(
        rewrite_inline("<b>a</b> mid <b>c</b>"),
        "<strong>a</strong> mid <strong>c</strong>"
    );
    assert_eq!(
        rewrite_inline("<i>a</i><i>b</i>"),
        "<em>a</em><em>b</em>"
    );
}

#[test]
fn test_unmatched_opener_passes_through() {
    assert_eq!(rewrite_inline("<b>unclosed"), "<b>unclosed");
    assert_eq!(rewrite_inline("pre <i>dangling"), "pre <i>dangling");
}

#[test]
fn test_substitution_is_single_pass() {
    // The rewritten output is not rescanned; a literal that happens to spell
    // an opener after substitution stays as the author wrote it.
    assert_eq!(
        rewrite_inline("<b>a</b><i>b</i>"),
        "<strong>a</strong><em>b</em>"
    );
}

#[test]
fn test_foreign_markup_untouched() {
    let line = r#"        <li><b>Citric Acid (330):</b> Provides tartness.</li>"#;
    assert_eq!(
        rewrite_inline(line),
        r#"        <li><strong>Citric Acid (330):</strong> Provides tartness.</li>"#
    );

    // No bold/italic tags at all: byte-for-byte identical.
    for line in [
        "      <ul>",
        "        <hr>",
        r#"        <h2 class="fw-bold">Key Ingredients:</h2>"#,
        r#"        <img src="/biochem-photos/benedict-1.jpeg" alt="trial 1">"#,
    ] {
        assert_eq!(rewrite_inline(line), line);
    }
}

// ============================================================================
// Block splitting
// ============================================================================

#[test]
fn test_blank_line_becomes_break() {
    let out: Vec<Block> = blocks("a\n   \nb").collect();
    assert_eq!(
        out,
        vec![
            Block::Paragraph("a".to_string()),
            Block::Break,
            Block::Paragraph("b".to_string()),
        ]
    );
}

#[test]
fn test_consecutive_blank_lines_stay_separate() {
    let out: Vec<Block> = blocks("a\n\n\nb").collect();
    assert_eq!(
        out,
        vec![
            Block::Paragraph("a".to_string()),
            Block::Break,
            Block::Break,
            Block::Paragraph("b".to_string()),
        ]
    );
}

#[test]
fn test_order_matches_input() {
    let out: Vec<Block> = blocks("one\ntwo\nthree").collect();
    assert_eq!(
        out,
        vec![
            Block::Paragraph("one".to_string()),
            Block::Paragraph("two".to_string()),
            Block::Paragraph("three".to_string()),
        ]
    );
}

#[test]
fn test_formatter_is_pure() {
    let input = "<b>x</b>\n\n<i>y</i>";
    let first: Vec<Block> = blocks(input).collect();
    let second: Vec<Block> = blocks(input).collect();
    assert_eq!(first, second);
}

// ============================================================================
// Emphasis-span presentation
// ============================================================================

#[test]
fn test_spans_extracts_emphasis_runs() {
    assert_eq!(
        richtext::spans("<strong>x</strong> and <em>y</em>"),
        vec![
            Span::styled("x", TextStyle::new().bold()),
            Span::new(" and "),
            Span::styled("y", TextStyle::new().italic()),
        ]
    );
}

#[test]
fn test_spans_leaves_other_markup_literal() {
    assert_eq!(
        richtext::spans("<li>plain</li>"),
        vec![Span::new("<li>plain</li>")]
    );
}

#[test]
fn test_spans_unclosed_tag_is_literal() {
    assert_eq!(
        richtext::spans("<strong>oops"),
        vec![Span::new("<strong>oops")]
    );
}

#[test]
fn test_spans_nested_emphasis_unions_styles() {
    assert_eq!(
        richtext::spans("<strong>a <em>b</em></strong>"),
        vec![
            Span::styled("a ", TextStyle::new().bold()),
            Span::styled("b", TextStyle::new().bold().italic()),
        ]
    );
}
