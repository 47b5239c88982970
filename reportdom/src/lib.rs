pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element, Span};
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, Layout, Rect};
pub use terminal::Terminal;
pub use types::*;
