use reportdom::render::render_to_buffer;
use reportdom::{
    layout, Border, Buffer, Color, DefaultTheme, Element, Rect, Size, Span, Style, TextStyle,
    TextWrap,
};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf, &DefaultTheme);
    buf
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.width())
        .map(|x| buf.get(x, y).map(|c| c.ch).unwrap_or(' '))
        .collect()
}

#[test]
fn test_render_text() {
    let root = Element::text("hi").id("t");
    let buf = render(&root, 5, 2);

    assert_eq!(row_text(&buf, 0).trim_end(), "hi");
}

#[test]
fn test_render_text_style_applied() {
    let root = Element::text("hi").id("t").style(Style::new().bold());
    let buf = render(&root, 5, 1);

    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.ch, 'h');
    assert!(cell.style.bold);
}

#[test]
fn test_render_span_styles_per_run() {
    let root = Element::spans(vec![
        Span::new("a"),
        Span::styled("b", TextStyle::new().italic()),
    ])
    .id("p");
    let buf = render(&root, 5, 1);

    assert!(!buf.get(0, 0).unwrap().style.italic);
    assert!(buf.get(1, 0).unwrap().style.italic);
}

#[test]
fn test_render_background_fill() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(3))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(10, 20, 30)));
    let buf = render(&root, 5, 3);

    assert_eq!(buf.get(2, 1).unwrap().bg, reportdom::Rgb::new(10, 20, 30));
    // Outside the element the default background remains.
    assert_eq!(buf.get(4, 2).unwrap().bg, reportdom::Rgb::new(0, 0, 0));
}

#[test]
fn test_render_border_corners() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(4))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded));
    let buf = render(&root, 6, 4);

    assert_eq!(buf.get(0, 0).unwrap().ch, '╭');
    assert_eq!(buf.get(3, 0).unwrap().ch, '╮');
    assert_eq!(buf.get(0, 2).unwrap().ch, '╰');
    assert_eq!(buf.get(3, 2).unwrap().ch, '╯');
    assert_eq!(buf.get(1, 0).unwrap().ch, '─');
    assert_eq!(buf.get(0, 1).unwrap().ch, '│');
}

#[test]
fn test_render_wrapped_paragraph() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(5))
        .child(
            Element::text("ab cd ef")
                .id("p")
                .width(Size::Fill)
                .text_wrap(TextWrap::Wrap),
        );
    let buf = render(&root, 5, 4);

    assert_eq!(row_text(&buf, 0).trim_end(), "ab cd");
    assert_eq!(row_text(&buf, 1).trim_end(), "ef");
}

#[test]
fn test_render_scrolled_content_clipped() {
    let root = Element::col()
        .id("root")
        .scrollable(true)
        .scroll_offset(1)
        .width(Size::Fixed(3))
        .height(Size::Fixed(2))
        .child(Element::text("a").id("a").width(Size::Fill))
        .child(Element::text("b").id("b").width(Size::Fill))
        .child(Element::text("c").id("c").width(Size::Fill))
        .child(Element::text("d").id("d").width(Size::Fill));
    let buf = render(&root, 3, 2);

    // Row "a" is scrolled off the top; "d" is below the fold.
    assert_eq!(row_text(&buf, 0).trim_end(), "b");
    assert_eq!(row_text(&buf, 1).trim_end(), "c");
}
