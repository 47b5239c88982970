use std::time::Duration;

use reportdom::{
    translate_events, Border, Color, DefaultTheme, Edges, Element, Event, Justify, Key, Size,
    Span, Style, Terminal, TextStyle, TextWrap,
};

fn main() -> std::io::Result<()> {
    let mut term = Terminal::new(true)?;
    let mut expanded = false;

    loop {
        let root = ui(expanded);
        term.render(&root, &DefaultTheme)?;

        let raw = term.poll(Some(Duration::from_millis(100)))?;
        for event in translate_events(&raw, &root, term.layout()) {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Click { target: Some(id), .. } if id == "header" => {
                    expanded = !expanded;
                }
                _ => {}
            }
        }
    }
}

fn ui(expanded: bool) -> Element {
    let chevron = if expanded { "▲" } else { "▼" };

    let header = Element::row()
        .id("header")
        .clickable(true)
        .width(Size::Fill)
        .justify(Justify::SpaceBetween)
        .child(Element::text("Click me").style(Style::new().bold()))
        .child(Element::text(chevron));

    let mut panel = Element::col()
        .width(Size::Fill)
        .padding(Edges::symmetric(0, 1))
        .style(Style::new().border(Border::Rounded))
        .child(header);

    if expanded {
        panel = panel.child(
            Element::spans(vec![
                Span::new("A paragraph with a "),
                Span::styled("bold", TextStyle::new().bold()),
                Span::new(" run and an "),
                Span::styled("italic", TextStyle::new().italic()),
                Span::new(" run, wrapped to the panel width."),
            ])
            .width(Size::Fill)
            .text_wrap(TextWrap::Wrap),
        );
    }

    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .child(panel)
        .child(Element::text("Press 'q' to quit").style(Style::new().dim()))
        .style(Style::new().background(Color::oklch(0.15, 0.02, 140.0)))
}
