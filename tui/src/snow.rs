//! Ambient snowfall drawn behind the panels.
//!
//! Purely decorative: flakes never cover panel text because the panel is
//! rendered afterwards on top of them.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::theme::{Glyphs, Palette};

/// Roughly one flake per this many cells.
const CELLS_PER_FLAKE: usize = 60;
const MIN_SPEED: f32 = 2.0; // rows per second
const MAX_SPEED: f32 = 6.0;

#[derive(Debug, Clone)]
struct Flake {
    x: f32,
    y: f32,
    speed: f32,
    drift: f32,
    glyph: usize,
}

#[derive(Debug)]
pub struct Snowfall {
    rng: StdRng,
    flakes: Vec<Flake>,
    area: Rect,
}

impl Snowfall {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            flakes: Vec::new(),
            area: Rect::default(),
        }
    }

    #[must_use]
    pub fn flake_count(&self) -> usize {
        self.flakes.len()
    }

    /// Step the simulation. Re-seeds the field when the area changes size.
    pub fn update(&mut self, area: Rect, delta: Duration) {
        if area != self.area {
            self.area = area;
            self.reseed();
        }
        if area.is_empty() {
            return;
        }

        let secs = delta.as_secs_f32();
        let width = f32::from(area.width);
        let height = f32::from(area.height);
        for index in 0..self.flakes.len() {
            let flake = &mut self.flakes[index];
            flake.y += flake.speed * secs;
            flake.x = (flake.x + flake.drift * secs).rem_euclid(width);
            if flake.y >= height {
                let fresh = spawn(&mut self.rng, area.width, 0.0);
                self.flakes[index] = fresh;
            }
        }
    }

    fn reseed(&mut self) {
        let cells = usize::from(self.area.width) * usize::from(self.area.height);
        let count = cells / CELLS_PER_FLAKE;
        let height = f32::from(self.area.height.max(1));
        self.flakes = (0..count)
            .map(|_| {
                let y = self.rng.random_range(0.0..height);
                spawn(&mut self.rng, self.area.width, y)
            })
            .collect();
    }

    pub fn render(&self, buf: &mut Buffer, palette: &Palette, glyphs: &Glyphs) {
        let style = Style::default().fg(palette.snow);
        for flake in &self.flakes {
            let x = self.area.x.saturating_add(flake.x as u16);
            let y = self.area.y.saturating_add(flake.y as u16);
            if !self.area.contains((x, y).into()) {
                continue;
            }
            let glyph = glyphs.snowflakes[flake.glyph % glyphs.snowflakes.len()];
            buf.set_string(x, y, glyph, style);
        }
    }
}

fn spawn(rng: &mut StdRng, width: u16, y: f32) -> Flake {
    Flake {
        x: rng.random_range(0.0..f32::from(width.max(1))),
        y,
        speed: rng.random_range(MIN_SPEED..MAX_SPEED),
        drift: rng.random_range(-1.0..1.0),
        glyph: rng.random_range(0..8),
    }
}
