//! Scoped reveal timers.
//!
//! Timers are deadline records advanced by the frame loop rather than
//! callbacks on a runtime. A [`PanelTenure`] owns every timer scheduled for
//! the panel that is current; ending the tenure (dropping it) cancels them,
//! so no trigger can outlive the panel that armed it.

use std::time::Duration;

use lantern_types::{PanelSpec, Reveal};
use tracing::debug;

/// One-shot trigger that fires a single [`Reveal`] once its delay has elapsed.
#[derive(Debug)]
pub struct RevealTimer {
    reveal: Reveal,
    panel_index: usize,
    remaining: Duration,
    fired: bool,
}

impl RevealTimer {
    #[must_use]
    pub fn new(reveal: Reveal, panel_index: usize, delay: Duration) -> Self {
        debug!(
            reveal = reveal.as_str(),
            panel = panel_index,
            delay_ms = delay.as_millis() as u64,
            "Reveal timer scheduled"
        );
        Self {
            reveal,
            panel_index,
            remaining: delay,
            fired: false,
        }
    }

    /// Advance by `delta`. Returns `true` exactly once: on the call that
    /// crosses the deadline.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            self.fired = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        if !self.fired {
            debug!(
                reveal = self.reveal.as_str(),
                panel = self.panel_index,
                remaining_ms = self.remaining.as_millis() as u64,
                "Reveal timer cancelled"
            );
        }
    }
}

/// The timers belonging to one panel's stay as the current panel.
///
/// Holds at most one timer per [`Reveal`] kind, each with its own slot so
/// they can be cancelled independently.
#[derive(Debug)]
pub(crate) struct PanelTenure {
    panel_index: usize,
    secondary: Option<RevealTimer>,
    continue_hint: Option<RevealTimer>,
}

impl PanelTenure {
    /// Start a tenure for `panel`, arming whatever reveals it declares.
    pub(crate) fn enter(panel: &PanelSpec) -> Self {
        let index = panel.index();
        let secondary = panel
            .secondary_delay()
            .map(|delay| RevealTimer::new(Reveal::Secondary, index, delay));
        let continue_hint = panel
            .is_first_panel()
            .then(|| panel.continue_hint_delay())
            .flatten()
            .map(|delay| RevealTimer::new(Reveal::ContinueHint, index, delay));

        Self {
            panel_index: index,
            secondary,
            continue_hint,
        }
    }

    pub(crate) fn panel_index(&self) -> usize {
        self.panel_index
    }

    /// Advance every live timer; returns the reveals that fired on this call.
    pub(crate) fn advance(&mut self, delta: Duration) -> Vec<Reveal> {
        let mut fired = Vec::new();
        for slot in [&mut self.secondary, &mut self.continue_hint] {
            if let Some(timer) = slot
                && timer.advance(delta)
            {
                fired.push(timer.reveal());
            }
        }
        fired
    }

    /// Time left on the pending timer for `reveal`, if one is still armed.
    pub(crate) fn pending(&self, reveal: Reveal) -> Option<Duration> {
        let slot = match reveal {
            Reveal::Secondary => &self.secondary,
            Reveal::ContinueHint => &self.continue_hint,
        };
        slot.as_ref()
            .filter(|timer| !timer.is_fired())
            .map(RevealTimer::remaining)
    }

    /// Cancel one kind of timer without ending the tenure. Safe on an empty slot.
    pub(crate) fn cancel(&mut self, reveal: Reveal) {
        match reveal {
            Reveal::Secondary => self.secondary = None,
            Reveal::ContinueHint => self.continue_hint = None,
        }
    }
}
