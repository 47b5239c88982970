mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, ColorContext, DefaultTheme, Rgb, Theme};
pub use edges::Edges;
pub use enums::{Border, Direction, Justify, Size, TextAlign, TextStyle, TextWrap};
pub use style::Style;
