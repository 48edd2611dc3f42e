//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

pub mod vt100_backend;

use std::time::Duration;

use lantern_engine::{App, Settings, Variant};
use lantern_tui::{Snowfall, draw};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;

use vt100_backend::VT100Backend;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 24;

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Built-in settings for `variant` with motion disabled so frames are stable.
pub fn still_settings(variant: Variant) -> Settings {
    let mut settings = Settings::defaults(variant).expect("built-in tables are valid");
    settings.ui.reduced_motion = true;
    settings
}

pub fn mount(settings: Settings, seed: u64) -> App {
    App::with_rng(settings, &mut StdRng::seed_from_u64(seed))
}

/// A mounted app plus the virtual terminal it is drawn onto.
pub struct Screen {
    pub app: App,
    pub terminal: Terminal<VT100Backend>,
    snow: Snowfall,
}

impl Screen {
    pub fn new(app: App) -> Self {
        Self {
            app,
            terminal: Terminal::new(VT100Backend::new(WIDTH, HEIGHT))
                .expect("failed to create terminal"),
            snow: Snowfall::new(0),
        }
    }

    pub fn render(&mut self) -> &VT100Backend {
        let Self {
            app,
            terminal,
            snow,
        } = self;
        terminal
            .draw(|frame| draw(frame, app, snow))
            .expect("failed to draw");
        terminal.backend()
    }

    pub fn text(&mut self) -> String {
        self.render().contents()
    }

    /// Advance time by `millis` and redraw.
    pub fn wait(&mut self, millis: u64) -> String {
        self.app.advance_time(ms(millis));
        self.text()
    }

    /// Left-click on the first screen cell showing `needle`.
    pub fn click_on(&mut self, needle: &str) -> bool {
        let (col, row) = self
            .render()
            .find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not on screen"));
        self.app.click_at(col, row)
    }

    /// Left-click on an empty corner of the screen.
    pub fn click_background(&mut self) -> bool {
        self.app.click_at(0, 0)
    }
}
