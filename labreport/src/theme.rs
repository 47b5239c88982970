//! The report's lime-on-dark palette, named after the page's roles.

use reportdom::{Color, Theme};

pub struct ReportTheme;

impl Theme for ReportTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        static BACKGROUND: Color = Color::Oklch {
            l: 0.14,
            c: 0.02,
            h: 140.0,
        };
        static SURFACE: Color = Color::Oklch {
            l: 0.19,
            c: 0.03,
            h: 140.0,
        };
        static FOREGROUND: Color = Color::Oklch {
            l: 0.93,
            c: 0.01,
            h: 120.0,
        };
        static PRIMARY: Color = Color::Oklch {
            l: 0.78,
            c: 0.17,
            h: 130.0,
        };
        static ACCENT: Color = Color::Oklch {
            l: 0.86,
            c: 0.14,
            h: 125.0,
        };
        static MUTED: Color = Color::Oklch {
            l: 0.62,
            c: 0.03,
            h: 140.0,
        };
        static BORDER: Color = Color::Oklch {
            l: 0.45,
            c: 0.06,
            h: 135.0,
        };

        match name {
            "background" => Some(&BACKGROUND),
            "surface" => Some(&SURFACE),
            "foreground" => Some(&FOREGROUND),
            "primary" => Some(&PRIMARY),
            "accent" => Some(&ACCENT),
            "muted" => Some(&MUTED),
            "border" => Some(&BORDER),
            _ => None,
        }
    }
}
