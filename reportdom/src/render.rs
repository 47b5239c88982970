use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element, Span};
use crate::layout::{Layout, Rect};
use crate::text::{align_offset, char_width, spans_width, truncate_to_width, wrap_spans};
use crate::types::{Border, ColorContext, Rgb, TextStyle, TextWrap, Theme};

/// Paint the tree into the buffer. Element rects inside scroll containers are
/// in virtual coordinates; painting shifts them up by the accumulated scroll
/// offset and clips to the container.
pub fn render_to_buffer(root: &Element, layout: &Layout, buf: &mut Buffer, theme: &dyn Theme) {
    let ctx = ColorContext::new(theme);
    let clip = Rect::from_size(buf.width(), buf.height());
    render_element(root, layout, buf, &ctx, clip, 0);
}

struct Painter<'a> {
    buf: &'a mut Buffer,
    clip: Rect,
    offset: u16,
}

impl Painter<'_> {
    /// Translate a virtual position to the screen; None when clipped.
    fn screen(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        let sy = y as i32 - self.offset as i32;
        if sy < 0 {
            return None;
        }
        let sy = sy as u16;
        self.clip.contains(x, sy).then_some((x, sy))
    }

    fn set_bg(&mut self, x: u16, y: u16, bg: Rgb) {
        if let Some((sx, sy)) = self.screen(x, y) {
            if let Some(cell) = self.buf.get_mut(sx, sy) {
                cell.bg = bg;
            }
        }
    }

    fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some((sx, sy)) = self.screen(x, y) {
            if let Some(cell) = self.buf.get_mut(sx, sy) {
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }

    fn set_text_cell(&mut self, x: u16, y: u16, ch: char, fg: Rgb, bg: Option<Rgb>, style: TextStyle) {
        if let Some((sx, sy)) = self.screen(x, y) {
            let bg = bg
                .or_else(|| self.buf.get(sx, sy).map(|c| c.bg))
                .unwrap_or_default();
            self.buf
                .set(sx, sy, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
        }
    }
}

fn render_element(
    element: &Element,
    layout: &Layout,
    buf: &mut Buffer,
    ctx: &ColorContext,
    clip: Rect,
    offset: u16,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    if rect.is_empty() || clip.is_empty() {
        return;
    }

    let mut painter = Painter {
        buf: &mut *buf,
        clip,
        offset,
    };

    if let Some(bg) = &element.style.background {
        let rgb = ctx.to_rgb(bg);
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                painter.set_bg(x, y, rgb);
            }
        }
    }

    render_border(element, rect, ctx, &mut painter);

    let inner = inner_rect(element, rect);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            let spans = [Span::new(text.clone())];
            render_spans(&spans, element, inner, ctx, &mut painter);
        }
        Content::Spans(spans) => {
            render_spans(spans, element, inner, ctx, &mut painter);
        }
        Content::Children(children) => {
            let (child_clip, child_offset) = if element.scrollable {
                let screen_inner = shift_rect(inner, offset);
                (clip.intersect(screen_inner), offset + element.scroll_offset)
            } else {
                (clip, offset)
            };
            for child in children {
                render_element(child, layout, buf, ctx, child_clip, child_offset);
            }
        }
    }
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let b = if element.style.border == Border::None {
        0
    } else {
        1
    };
    rect.shrink(
        element.padding.top + b,
        element.padding.right + b,
        element.padding.bottom + b,
        element.padding.left + b,
    )
}

fn shift_rect(rect: Rect, offset: u16) -> Rect {
    let top = (rect.y as i32 - offset as i32).max(0) as u16;
    let bottom = (rect.bottom() as i32 - offset as i32).max(0) as u16;
    Rect::new(rect.x, top, rect.width, bottom.saturating_sub(top))
}

fn render_spans(
    spans: &[Span],
    element: &Element,
    inner: Rect,
    ctx: &ColorContext,
    painter: &mut Painter,
) {
    if inner.is_empty() {
        return;
    }

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| ctx.to_rgb(c))
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = element.style.background.as_ref().map(|c| ctx.to_rgb(c));
    let base = element.style.text_style;

    let lines: Vec<Vec<Span>> = match element.text_wrap {
        TextWrap::Wrap => wrap_spans(spans, inner.width as usize),
        TextWrap::NoWrap => vec![spans.to_vec()],
        TextWrap::Truncate => {
            let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
            vec![vec![Span::new(truncate_to_width(&joined, inner.width as usize))]]
        }
    };

    for (row, line) in lines.iter().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            break;
        }

        let line_width = spans_width(line);
        let mut x = inner.x + align_offset(line_width, inner.width as usize, element.text_align) as u16;

        for span in line {
            let style = merge_styles(base, span.style);
            for ch in span.text.chars() {
                if x >= inner.right() {
                    break;
                }
                painter.set_text_cell(x, y, ch, fg, explicit_bg, style);
                x += char_width(ch).max(1) as u16;
            }
        }
    }
}

fn merge_styles(base: TextStyle, span: TextStyle) -> TextStyle {
    TextStyle {
        bold: base.bold || span.bold,
        italic: base.italic || span.italic,
        underline: base.underline || span.underline,
        dim: base.dim || span.dim,
    }
}

fn render_border(element: &Element, rect: Rect, ctx: &ColorContext, painter: &mut Painter) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| ctx.to_rgb(c))
        .unwrap_or(Rgb::new(255, 255, 255));

    painter.set_char(rect.x, rect.y, tl, fg);
    painter.set_char(rect.right() - 1, rect.y, tr, fg);
    painter.set_char(rect.x, rect.bottom() - 1, bl, fg);
    painter.set_char(rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        painter.set_char(x, rect.y, h, fg);
        painter.set_char(x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        painter.set_char(rect.x, y, v, fg);
        painter.set_char(rect.right() - 1, y, v, fg);
    }
}
