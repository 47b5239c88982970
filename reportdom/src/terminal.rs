use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, Layout, Rect};
use crate::render::render_to_buffer;
use crate::types::{Rgb, TextStyle, Theme};

/// Raw-mode terminal driver: owns the double buffer, lays out and paints the
/// tree, and flushes only the cells that changed since the previous frame.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: Layout,
    mouse: bool,
}

impl Terminal {
    pub fn new(mouse: bool) -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        if mouse {
            execute!(stdout, event::EnableMouseCapture)?;
        }

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: Layout::new(),
            mouse,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Collect pending input events, waiting at most `timeout` for the first.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn render(&mut self, root: &Element, theme: &dyn Theme) -> io::Result<&Layout> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
        }

        self.current.clear();

        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current, theme);

        self.flush_diff()?;

        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &Layout {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if y != last_y || x != last_x.wrapping_add(1) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                apply_style(&mut self.stdout, cell.style, last_style)?;
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.ch)?;

            last_x = x;
            last_y = y;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

}

fn apply_style(stdout: &mut io::Stdout, new: TextStyle, old: TextStyle) -> io::Result<()> {
    if new.bold != old.bold {
        let attr = if new.bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        };
        execute!(stdout, SetAttribute(attr))?;
    }
    if new.dim != old.dim {
        let attr = if new.dim {
            Attribute::Dim
        } else {
            Attribute::NormalIntensity
        };
        execute!(stdout, SetAttribute(attr))?;
    }
    if new.italic != old.italic {
        let attr = if new.italic {
            Attribute::Italic
        } else {
            Attribute::NoItalic
        };
        execute!(stdout, SetAttribute(attr))?;
    }
    if new.underline != old.underline {
        let attr = if new.underline {
            Attribute::Underlined
        } else {
            Attribute::NoUnderline
        };
        execute!(stdout, SetAttribute(attr))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(self.stdout, event::DisableMouseCapture);
        }
        let _ = execute!(
            self.stdout,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
