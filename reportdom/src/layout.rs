use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::{display_width, spans_width, wrap_spans, wrap_text};
use crate::types::{Border, Direction, Justify, Size, TextWrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

/// Result of a layout pass: a rect per element, plus the natural content
/// height of each scroll container (children laid out in virtual coordinates
/// may extend past the container; the app clamps scrolling against this).
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rects: HashMap<String, Rect>,
    content_heights: HashMap<String, u16>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn content_height(&self, id: &str) -> Option<u16> {
        self.content_heights.get(id).copied()
    }

    /// Rows a scroll container can be scrolled down, given its laid-out size.
    pub fn max_scroll(&self, id: &str) -> u16 {
        let Some(height) = self.content_heights.get(id) else {
            return 0;
        };
        let visible = self.rects.get(id).map_or(0, |r| r.height);
        height.saturating_sub(visible)
    }
}

pub fn layout(root: &Element, viewport: Rect) -> Layout {
    let mut result = Layout::new();

    let width = resolve_width(root, viewport.width);
    let height = match root.height {
        Size::Fixed(n) => n.min(viewport.height),
        Size::Fill => viewport.height,
        Size::Auto => measure_height(root, width).min(viewport.height),
    };
    let rect = Rect::new(viewport.x, viewport.y, width, height);
    result.insert(root.id.clone(), rect);
    place_children(root, rect, &mut result);

    result
}

fn border_inset(border: Border) -> u16 {
    if border == Border::None {
        0
    } else {
        1
    }
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let b = border_inset(element.style.border);
    rect.shrink(
        element.padding.top + b,
        element.padding.right + b,
        element.padding.bottom + b,
        element.padding.left + b,
    )
}

/// Intrinsic width of an element, before any parent constraint.
fn intrinsic_width(element: &Element) -> u16 {
    let chrome =
        element.padding.horizontal_total() + 2 * border_inset(element.style.border);

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => display_width(text) as u16,
        Content::Spans(spans) => spans_width(spans) as u16,
        Content::Children(children) => {
            let widths = children.iter().map(intrinsic_width);
            match element.direction {
                Direction::Row => {
                    let gaps = element.gap * children.len().saturating_sub(1) as u16;
                    widths.sum::<u16>() + gaps
                }
                Direction::Column => widths.max().unwrap_or(0),
            }
        }
    };

    content + chrome
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    match element.width {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic_width(element).min(available),
    }
}

/// Outer height of an element at the given outer width. Wrap-aware: a
/// paragraph's height depends on how many lines it wraps to.
fn measure_height(element: &Element, width: u16) -> u16 {
    if let Size::Fixed(n) = element.height {
        return n;
    }

    let chrome = element.padding.vertical_total() + 2 * border_inset(element.style.border);
    let inner_width = width
        .saturating_sub(element.padding.horizontal_total() + 2 * border_inset(element.style.border));

    let content = match &element.content {
        Content::None => 0,
        Content::Text(text) => match element.text_wrap {
            TextWrap::Wrap => wrap_text(text, inner_width as usize).len() as u16,
            TextWrap::NoWrap | TextWrap::Truncate => text.lines().count().max(1) as u16,
        },
        Content::Spans(spans) => match element.text_wrap {
            TextWrap::Wrap => wrap_spans(spans, inner_width as usize).len() as u16,
            TextWrap::NoWrap | TextWrap::Truncate => 1,
        },
        Content::Children(children) => match element.direction {
            Direction::Column => {
                let gaps = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|child| {
                        let cw = resolve_width(child, inner_width);
                        child_height(child, cw, 0)
                    })
                    .sum::<u16>()
                    + gaps
            }
            Direction::Row => {
                let widths = row_widths(element, children, inner_width);
                children
                    .iter()
                    .zip(widths)
                    .map(|(child, cw)| child_height(child, cw, 0))
                    .max()
                    .unwrap_or(0)
            }
        },
    };

    content + chrome
}

fn child_height(child: &Element, width: u16, fill_height: u16) -> u16 {
    match child.height {
        Size::Fixed(n) => n,
        Size::Fill => fill_height,
        Size::Auto => measure_height(child, width),
    }
}

/// Widths for the children of a row: fixed and auto first, leftover split
/// evenly among Fill children.
fn row_widths(element: &Element, children: &[Element], inner_width: u16) -> Vec<u16> {
    let gaps = element.gap * children.len().saturating_sub(1) as u16;
    let mut used = gaps;
    let mut fill_count = 0u16;

    for child in children {
        match child.width {
            Size::Fixed(n) => used += n,
            Size::Auto => used += intrinsic_width(child),
            Size::Fill => fill_count += 1,
        }
    }

    let fill_each = if fill_count > 0 {
        inner_width.saturating_sub(used) / fill_count
    } else {
        0
    };

    children
        .iter()
        .map(|child| match child.width {
            Size::Fixed(n) => n.min(inner_width),
            Size::Auto => intrinsic_width(child).min(inner_width),
            Size::Fill => fill_each,
        })
        .collect()
}

fn place_children(element: &Element, rect: Rect, result: &mut Layout) {
    let Content::Children(children) = &element.content else {
        return;
    };
    if children.is_empty() {
        if element.scrollable {
            result.content_heights.insert(element.id.clone(), 0);
        }
        return;
    }

    let inner = inner_rect(element, rect);

    match element.direction {
        Direction::Column => place_column(element, children, inner, result),
        Direction::Row => place_row(element, children, inner, result),
    }
}

fn place_column(element: &Element, children: &[Element], inner: Rect, result: &mut Layout) {
    let gaps = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: resolve widths and non-fill heights.
    let widths: Vec<u16> = children
        .iter()
        .map(|child| resolve_width(child, inner.width))
        .collect();

    let mut fixed_total = gaps;
    let mut fill_count = 0u16;
    for (child, &w) in children.iter().zip(&widths) {
        match child.height {
            Size::Fill => fill_count += 1,
            _ => fixed_total += child_height(child, w, 0),
        }
    }

    let fill_each = if fill_count > 0 {
        inner.height.saturating_sub(fixed_total) / fill_count
    } else {
        0
    };

    let heights: Vec<u16> = children
        .iter()
        .zip(&widths)
        .map(|(child, &w)| child_height(child, w, fill_each))
        .collect();

    let total: u16 = heights.iter().sum::<u16>() + gaps;

    // A scroll container stacks from the top in virtual coordinates and
    // records how tall the stack is; justify only applies to real space.
    let start = if element.scrollable {
        0
    } else {
        justify_offset(element.justify, total, inner.height)
    };
    let between = justify_gap(element.justify, children.len(), total, inner.height, element.gap);

    let mut y = inner.y + start;
    for ((child, &w), &h) in children.iter().zip(&widths).zip(&heights) {
        let rect = Rect::new(inner.x, y, w, h);
        result.insert(child.id.clone(), rect);
        place_children(child, rect, result);
        y = y.saturating_add(h).saturating_add(between);
    }

    if element.scrollable {
        // Include the container's own chrome so max_scroll can compare
        // against its outer height.
        let chrome = element.padding.vertical_total() + 2 * border_inset(element.style.border);
        result
            .content_heights
            .insert(element.id.clone(), total + chrome);
    }
}

fn place_row(element: &Element, children: &[Element], inner: Rect, result: &mut Layout) {
    let widths = row_widths(element, children, inner.width);
    let total: u16 = widths.iter().sum::<u16>()
        + element.gap * children.len().saturating_sub(1) as u16;

    let start = justify_offset(element.justify, total, inner.width);
    let between = justify_gap(element.justify, children.len(), total, inner.width, element.gap);

    let mut x = inner.x + start;
    for (child, &w) in children.iter().zip(&widths) {
        let h = child_height(child, w, inner.height).min(inner.height);
        let rect = Rect::new(x, inner.y, w, h);
        result.insert(child.id.clone(), rect);
        place_children(child, rect, result);
        x = x.saturating_add(w).saturating_add(between);
    }
}

fn justify_offset(justify: Justify, content: u16, available: u16) -> u16 {
    let extra = available.saturating_sub(content);
    match justify {
        Justify::Start | Justify::SpaceBetween => 0,
        Justify::Center => extra / 2,
        Justify::End => extra,
    }
}

fn justify_gap(justify: Justify, count: usize, content: u16, available: u16, gap: u16) -> u16 {
    match justify {
        Justify::SpaceBetween if count > 1 => {
            gap + available.saturating_sub(content) / (count as u16 - 1)
        }
        _ => gap,
    }
}
