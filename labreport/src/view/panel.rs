//! One expandable panel: always a header, a body only while expanded.

use reportdom::{Border, Color, Edges, Element, Justify, Size, Style, TextAlign, TextWrap};

use crate::markup::{self, Block};
use crate::registry::{ContentRecord, Icon};
use crate::richtext;

/// Element id of the panel's clickable header.
pub fn header_id(key: &str) -> String {
    format!("panel-{key}-header")
}

/// Recover the record key from a header element id.
pub fn panel_key(target: &str) -> Option<&str> {
    target.strip_prefix("panel-")?.strip_suffix("-header")
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Candy => "◆",
        Icon::Wheat => "❖",
        Icon::Droplets => "◉",
        Icon::TestTube => "▣",
        Icon::Leaf => "✿",
        Icon::AlertTriangle => "▲",
        Icon::CheckCircle => "✔",
        Icon::ListChecks => "☰",
    }
}

/// Render one record with its current expanded flag. The header is the only
/// clickable surface; activating it is the only way to flip this panel.
pub fn panel(record: &ContentRecord, expanded: bool) -> Element {
    let chevron = if expanded { "▲" } else { "▼" };

    let title = Element::row()
        .gap(1)
        .child(
            Element::text(icon_glyph(record.icon))
                .style(Style::new().foreground(Color::var("accent"))),
        )
        .child(Element::text(record.title).style(Style::new().bold()));

    let header = Element::row()
        .id(header_id(record.key))
        .clickable(true)
        .width(Size::Fill)
        .justify(Justify::SpaceBetween)
        .gap(1)
        .child(title)
        .child(Element::text(chevron).style(Style::new().foreground(Color::var("muted"))));

    let mut root = Element::col()
        .id(format!("panel-{}", record.key))
        .width(Size::Fill)
        .padding(Edges::symmetric(0, 1))
        .style(
            Style::new()
                .background(Color::var("surface"))
                .foreground(Color::var("border"))
                .border(Border::Rounded),
        )
        .child(header);

    if expanded {
        root = root.child(body(record));
    }

    root
}

fn body(record: &ContentRecord) -> Element {
    let mut body = Element::col()
        .id(format!("panel-{}-body", record.key))
        .width(Size::Fill);

    // Image reference and caption come as a pair or not at all.
    if let (Some(image), Some(alt)) = (record.image, record.image_alt) {
        body = body.child(image_block(record.key, image, alt));
    }

    for block in markup::blocks(record.description) {
        body = body.child(match block {
            Block::Break => Element::text(""),
            Block::Paragraph(text) => Element::spans(richtext::spans(&text))
                .width(Size::Fill)
                .text_wrap(TextWrap::Wrap)
                .style(Style::new().foreground(Color::var("foreground"))),
        });
    }

    body
}

fn image_block(key: &str, image: &'static str, alt: &'static str) -> Element {
    Element::col()
        .id(format!("panel-{key}-image"))
        .width(Size::Fill)
        .child(
            Element::text(format!("⧉ {image}"))
                .width(Size::Fill)
                .text_align(TextAlign::Center)
                .style(Style::new().foreground(Color::var("accent"))),
        )
        .child(
            Element::text(alt)
                .width(Size::Fill)
                .text_align(TextAlign::Center)
                .text_wrap(TextWrap::Wrap)
                .style(Style::new().italic().foreground(Color::var("muted"))),
        )
        .child(Element::text(""))
}
