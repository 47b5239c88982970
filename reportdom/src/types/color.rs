#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }
}

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Default theme with bare readable colors, used when no theme is installed.
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        static BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
        static WHITE: Color = Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        };
        match name {
            "background" => Some(&BLACK),
            "foreground" => Some(&WHITE),
            _ => None,
        }
    }
}

/// Resolves Var colors through a theme and converts everything to Rgb.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve a color to concrete terminal Rgb.
    /// Unresolved variables fall back to black rather than erroring: authored
    /// trees are static, so a missing variable is an authoring defect.
    pub fn to_rgb(&self, color: &Color) -> Rgb {
        match color {
            Color::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Color::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Color::Var(name) => match self.theme.resolve(name) {
                // Themes may alias one variable to another.
                Some(resolved) if resolved != color => self.to_rgb(resolved),
                _ => Rgb::default(),
            },
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
