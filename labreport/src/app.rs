//! Event loop and dispatch. Everything is synchronous: each event's state
//! transition completes before the next event is read.

use std::time::Duration;

use reportdom::{translate_events, Event, Key, Terminal};

use crate::error::AppError;
use crate::registry;
use crate::state::PanelState;
use crate::theme::ReportTheme;
use crate::view::{self, CONTENT_ID, MODEL_URL};

const PAGE_STEP: u16 = 10;

pub struct App {
    state: PanelState,
    scroll: u16,
    running: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: PanelState::new(),
            scroll: 0,
            running: true,
        }
    }

    pub fn run(&mut self, term: &mut Terminal) -> Result<(), AppError> {
        while self.running {
            let root = view::page(registry::records(), &self.state, self.scroll);
            let layout = term.render(&root, &ReportTheme)?;
            let max_scroll = layout.max_scroll(CONTENT_ID);

            // Collapsing a tall panel can strand the offset past the end.
            if self.scroll > max_scroll {
                self.scroll = max_scroll;
                continue;
            }

            let raw = term.poll(Some(Duration::from_millis(100)))?;
            if raw.is_empty() {
                continue;
            }

            for event in translate_events(&raw, &root, term.layout()) {
                self.handle_event(&event, max_scroll);
            }
        }

        Ok(())
    }

    /// Dispatch one event. Click targets are routed to exactly the panel
    /// whose header produced them; no other panel's flag is read or written.
    pub fn handle_event(&mut self, event: &Event, max_scroll: u16) {
        match event {
            Event::Key { key, modifiers } if modifiers.none() => match key {
                Key::Char('q') | Key::Escape => self.running = false,
                Key::Char('m') => {
                    if let Err(err) = open::that(MODEL_URL) {
                        log::warn!("failed to open model viewer: {err}");
                    }
                }
                Key::Up | Key::Char('k') => self.scroll = self.scroll.saturating_sub(1),
                Key::Down | Key::Char('j') => {
                    self.scroll = (self.scroll + 1).min(max_scroll);
                }
                Key::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
                Key::PageDown => {
                    self.scroll = (self.scroll + PAGE_STEP).min(max_scroll);
                }
                Key::Home => self.scroll = 0,
                Key::End => self.scroll = max_scroll,
                _ => {}
            },
            Event::Key { .. } => {}
            Event::Click {
                target: Some(id), ..
            } => {
                if let Some(key) = view::panel_key(id) {
                    let expanded = self.state.toggle(key);
                    log::info!("panel {key} -> {}", if expanded { "expanded" } else { "collapsed" });
                }
            }
            Event::Click { target: None, .. } => {}
            Event::Scroll { delta_y, .. } => {
                if *delta_y < 0 {
                    self.scroll = self.scroll.saturating_sub(delta_y.unsigned_abs());
                } else {
                    self.scroll = (self.scroll + *delta_y as u16).min(max_scroll);
                }
            }
            Event::Resize { .. } => {}
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
