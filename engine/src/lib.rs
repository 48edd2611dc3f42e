//! Lantern engine - panel sequencing and session state.
//!
//! This crate owns everything between raw input and rendering:
//!
//! - [`PanelSequencer`]: the cyclic panel state machine and its reveal timers
//! - [`ContentProvider`]: the once-per-session content pick
//! - [`Settings`] / [`LanternConfig`]: configuration resolution
//! - [`App`]: the facade the TUI drives once per frame
//!
//! Nothing here performs terminal IO.

mod config;
mod content;
mod input;
mod sequencer;
mod settings;
mod timer;
mod variants;

pub use config::{AppConfig, ConfigError, ContentConfig, LanternConfig, TimingConfig, config_path};
pub use content::{ContentProvider, default_pools};
pub use input::{ClickTarget, LinkClickPolicy, LinkHitRegion};
pub use sequencer::PanelSequencer;
pub use settings::{
    DEFAULT_CONTINUE_HINT, DEFAULT_CREDIT, EnvOverrides, Settings, SettingsError,
};
pub use timer::RevealTimer;
pub use variants::{DEFAULT_CONTINUE_HINT_DELAY, DEFAULT_SECONDARY_DELAY, Variant};

// Re-export the domain types the TUI needs so it does not reach into lantern-types directly.
pub use lantern_types::ui::{AnimPhase, PanelEffect, PanelEffectKind, UiOptions};
pub use lantern_types::{
    ContentCategory, ContentSelection, Link, LinkIcon, PanelSpec, PanelTable, Reveal,
    SecondaryBlock, SequenceState, TextSource,
};

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

const ENTRY_EFFECT_DURATION: Duration = Duration::from_millis(450);
const REVEAL_EFFECT_DURATION: Duration = Duration::from_millis(500);

/// One mounted slideshow session.
///
/// Content is selected exactly once, in the constructor. Clicks and frame
/// ticks are applied sequentially, so the renderer always observes a state
/// in which the last click and every elapsed reveal have fully landed.
#[derive(Debug)]
pub struct App {
    sequencer: PanelSequencer,
    selection: ContentSelection,
    options: UiOptions,
    link_clicks: LinkClickPolicy,
    credit: String,
    continue_hint: String,
    entry_effect: Option<PanelEffect>,
    reveal_effect: Option<PanelEffect>,
    link_regions: Vec<LinkHitRegion>,
    last_frame: Instant,
    last_delta: Duration,
    tick: usize,
    quit_requested: bool,
}

impl App {
    /// Mount a session, seeding content selection from `settings.seed` when present.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        match settings.seed {
            Some(seed) => Self::with_rng(settings, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(settings, &mut rand::rng()),
        }
    }

    #[must_use]
    pub fn with_rng<R: rand::Rng>(settings: Settings, rng: &mut R) -> Self {
        let Settings {
            variant,
            table,
            pools,
            ui,
            link_clicks,
            credit,
            continue_hint,
            seed: _,
        } = settings;

        let selection = ContentProvider::new(pools).select(rng);
        let sequencer = PanelSequencer::mount(table);
        info!(
            variant = variant.as_str(),
            panels = sequencer.table().len(),
            "Session mounted"
        );

        let mut app = Self {
            sequencer,
            selection,
            options: ui,
            link_clicks,
            credit,
            continue_hint,
            entry_effect: None,
            reveal_effect: None,
            link_regions: Vec::new(),
            last_frame: Instant::now(),
            last_delta: Duration::ZERO,
            tick: 0,
            quit_requested: false,
        };
        app.start_entry_effect();
        app
    }

    /// Handle a click. Returns whether the sequence advanced.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        if let ClickTarget::Link(url) = &target {
            info!(%url, "Link activated");
        }
        if !self.link_clicks.advances(&target) {
            return false;
        }
        self.settle();
        self.sequencer.advance();
        self.reveal_effect = None;
        // Regions belong to the panel that was drawn; the next draw replaces them.
        self.link_regions.clear();
        self.start_entry_effect();
        true
    }

    /// Resolve a click at a screen cell against the last frame's link regions.
    pub fn click_at(&mut self, column: u16, row: u16) -> bool {
        let target = self
            .link_at(column, row)
            .map_or(ClickTarget::Surface, |url| ClickTarget::Link(url.to_string()));
        self.click(target)
    }

    #[must_use]
    pub fn link_at(&self, column: u16, row: u16) -> Option<&str> {
        self.link_regions
            .iter()
            .find(|region| region.contains(column, row))
            .map(|region| region.url.as_str())
    }

    /// Return to the first panel without re-selecting content.
    pub fn restart(&mut self) {
        self.settle();
        self.sequencer.reset();
        self.reveal_effect = None;
        self.link_regions.clear();
        self.start_entry_effect();
    }

    /// Advance by the wall-clock time since the previous frame.
    pub fn tick(&mut self) -> Vec<Reveal> {
        let elapsed = self.frame_elapsed();
        self.advance_time(elapsed)
    }

    /// Advance by an explicit `delta`.
    pub fn advance_time(&mut self, delta: Duration) -> Vec<Reveal> {
        self.tick = self.tick.wrapping_add(1);
        self.last_delta = delta;

        for slot in [&mut self.entry_effect, &mut self.reveal_effect] {
            if let Some(effect) = slot.as_mut() {
                effect.advance(delta);
                if matches!(effect.phase(), AnimPhase::Completed) {
                    *slot = None;
                }
            }
        }

        let fired = self.sequencer.tick(delta);
        if !fired.is_empty() && !self.options.reduced_motion {
            self.reveal_effect = Some(PanelEffect::new(
                PanelEffectKind::RiseIn,
                REVEAL_EFFECT_DURATION,
            ));
        }
        fired
    }

    /// Charge the time since the last frame to the panel being left, so the
    /// next panel's delays start counting from the moment it is entered.
    fn settle(&mut self) {
        let elapsed = self.frame_elapsed();
        self.advance_time(elapsed);
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    fn start_entry_effect(&mut self) {
        self.entry_effect = (!self.options.reduced_motion)
            .then(|| PanelEffect::new(self.current_panel().entry(), ENTRY_EFFECT_DURATION));
    }

    /// Cancel all pending reveals. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.sequencer.teardown();
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    #[must_use]
    pub fn state(&self) -> SequenceState {
        self.sequencer.state()
    }

    #[must_use]
    pub fn current_panel(&self) -> &PanelSpec {
        self.sequencer.current_panel()
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.sequencer.table().len()
    }

    #[must_use]
    pub fn sequencer(&self) -> &PanelSequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn selection(&self) -> &ContentSelection {
        &self.selection
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn credit(&self) -> &str {
        &self.credit
    }

    #[must_use]
    pub fn continue_hint(&self) -> &str {
        &self.continue_hint
    }

    #[must_use]
    pub fn entry_effect(&self) -> Option<&PanelEffect> {
        self.entry_effect.as_ref()
    }

    #[must_use]
    pub fn reveal_effect(&self) -> Option<&PanelEffect> {
        self.reveal_effect.as_ref()
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Time covered by the most recent [`App::advance_time`].
    #[must_use]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Replace the link regions recorded for the current frame.
    pub fn set_link_regions(&mut self, regions: Vec<LinkHitRegion>) {
        self.link_regions = regions;
    }

    #[must_use]
    pub fn link_regions(&self) -> &[LinkHitRegion] {
        &self.link_regions
    }
}
