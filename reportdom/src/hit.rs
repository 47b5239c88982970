use crate::element::{Content, Element};
use crate::layout::{Layout, Rect};
use crate::types::Border;

/// Find the deepest clickable element at the given screen coordinates.
/// Returns None if no clickable element contains the point.
///
/// Scroll containers shift the probe into their virtual coordinate space, so
/// a header scrolled halfway up the page still resolves correctly.
pub fn hit_test(layout: &Layout, root: &Element, x: u16, y: u16) -> Option<String> {
    let clip = layout.get(&root.id).copied().unwrap_or_default();
    hit_element(layout, root, x, y, 0, clip)
}

fn hit_element(
    layout: &Layout,
    element: &Element,
    x: u16,
    y: u16,
    offset: u16,
    clip: Rect,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !clip.contains(x, y) || !contains_screen(*rect, offset, x, y) {
        return None;
    }

    let (child_offset, child_clip) = if element.scrollable {
        // Clip to the same region the renderer paints children into.
        let b = if element.style.border == Border::None {
            0
        } else {
            1
        };
        let inner = rect.shrink(
            element.padding.top + b,
            element.padding.right + b,
            element.padding.bottom + b,
            element.padding.left + b,
        );
        let screen = screen_rect(inner, offset);
        (offset + element.scroll_offset, clip.intersect(screen))
    } else {
        (offset, clip)
    };

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_element(layout, child, x, y, child_offset, child_clip) {
                return Some(id);
            }
        }
    }

    if element.clickable {
        Some(element.id.clone())
    } else {
        None
    }
}

fn contains_screen(rect: Rect, offset: u16, x: u16, y: u16) -> bool {
    let top = rect.y as i32 - offset as i32;
    let bottom = rect.bottom() as i32 - offset as i32;
    x >= rect.x && x < rect.right() && (y as i32) >= top && (y as i32) < bottom
}

fn screen_rect(rect: Rect, offset: u16) -> Rect {
    let top = (rect.y as i32 - offset as i32).max(0) as u16;
    let bottom = (rect.bottom() as i32 - offset as i32).max(0) as u16;
    Rect::new(rect.x, top, rect.width, bottom.saturating_sub(top))
}
