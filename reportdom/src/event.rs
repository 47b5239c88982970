use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::Layout;

/// High-level events produced from raw terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Mouse click, targeted at the deepest clickable element under it.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse wheel.
    Scroll { x: u16, y: u16, delta_y: i16 },
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Map raw crossterm events to high-level events, resolving click targets
/// against the current tree and layout.
pub fn translate_events(
    raw: &[CrosstermEvent],
    root: &Element,
    layout: &Layout,
) -> Vec<Event> {
    let mut events = Vec::new();

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                events.push(Event::Key {
                    key: key_event.code.into(),
                    modifiers: key_event.modifiers.into(),
                });
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;

                match mouse_event.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(layout, root, x, y);
                        log::debug!("click at ({x}, {y}) -> {target:?}");
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::ScrollUp => {
                        events.push(Event::Scroll { x, y, delta_y: -1 });
                    }
                    MouseEventKind::ScrollDown => {
                        events.push(Event::Scroll { x, y, delta_y: 1 });
                    }
                    _ => {}
                }
            }

            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }

            _ => {}
        }
    }

    events
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
