//! The whole report page: banner, model panel, expandable panels, footer.

use reportdom::{Border, Color, Edges, Element, Justify, Size, Style, TextWrap};

use crate::registry::ContentRecord;
use crate::state::PanelState;
use crate::view::panel::panel;

/// Id of the scrolling content column; the app clamps scrolling against its
/// laid-out content height.
pub const CONTENT_ID: &str = "content";

/// Reference URL of the external 3D model viewer. The page only hands it
/// off; nothing comes back.
pub const MODEL_URL: &str = "https://sketchfab.com/models/b69ee5b78260437d930201d67a8ab8e5/embed?autostart=1&ui_controls=0&ui_infos=0&ui_inspector=0&ui_watermark=0&ui_annotations=0&ui_animations=0";

/// Build the display tree for the current panel states and scroll position.
pub fn page(records: &[ContentRecord], state: &PanelState, scroll: u16) -> Element {
    let panels = records
        .iter()
        .map(|record| panel(record, state.is_expanded(record.key)));

    let content = Element::col()
        .id(CONTENT_ID)
        .scrollable(true)
        .scroll_offset(scroll)
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::symmetric(1, 2))
        .gap(1)
        .child(banner())
        .child(model_panel())
        .child(
            Element::text("Biochemical Analysis Results")
                .style(Style::new().bold().foreground(Color::var("primary"))),
        )
        .child(
            Element::text("Open each section below to explore detailed experimental results and conclusions")
                .width(Size::Fill)
                .text_wrap(TextWrap::Wrap)
                .style(Style::new().foreground(Color::var("muted"))),
        )
        .children(panels);

    Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::var("background")))
        .child(content)
        .child(footer())
}

fn banner() -> Element {
    Element::col()
        .width(Size::Fill)
        .child(
            Element::text("Sprite - Biochemistry")
                .style(Style::new().bold().foreground(Color::var("primary"))),
        )
        .child(
            Element::text("Science Project by Henry Sheffield")
                .style(Style::new().foreground(Color::var("muted"))),
        )
}

fn model_panel() -> Element {
    Element::col()
        .id("model")
        .width(Size::Fill)
        .padding(Edges::symmetric(0, 1))
        .style(
            Style::new()
                .background(Color::var("surface"))
                .foreground(Color::var("border"))
                .border(Border::Rounded),
        )
        .child(
            Element::text("Interactive Sprite 3D Model")
                .style(Style::new().bold().foreground(Color::var("accent"))),
        )
        .child(
            Element::text(MODEL_URL)
                .width(Size::Fill)
                .text_wrap(TextWrap::Wrap)
                .style(Style::new().dim()),
        )
        .child(
            Element::text("Note: this 3D model represents an older American Sprite can design with slightly different ingredients compared to the current formulation used in our analysis.")
                .width(Size::Fill)
                .text_wrap(TextWrap::Wrap)
                .style(Style::new().foreground(Color::var("muted"))),
        )
        .child(
            Element::text("Press 'm' to open the model in your browser")
                .style(Style::new().foreground(Color::var("primary"))),
        )
}

fn footer() -> Element {
    Element::row()
        .id("footer")
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .justify(Justify::SpaceBetween)
        .padding(Edges::symmetric(0, 1))
        .style(Style::new().background(Color::var("surface")))
        .child(
            Element::text("click a section to expand · ↑/↓ scroll · m model · q quit")
                .style(Style::new().foreground(Color::var("muted"))),
        )
        .child(Element::text("labreport").style(Style::new().dim()))
}
