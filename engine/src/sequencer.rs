//! Panel sequencing state machine.
//!
//! ```text
//! mount ──> panel 0 ──advance──> panel 1 ──advance──> ... ──advance──> panel N-1
//!              ^                                                          │
//!              └──────────────────────────advance─────────────────────────┘
//! ```
//!
//! Every transition ends the outgoing [`PanelTenure`] before the new one is
//! entered, so the flags of the new panel can only ever be set by timers the
//! new panel armed itself.

use std::time::Duration;

use lantern_types::{PanelSpec, PanelTable, Reveal, SequenceState};
use tracing::{debug, info};

use crate::timer::PanelTenure;

#[derive(Debug)]
pub struct PanelSequencer {
    table: PanelTable,
    state: SequenceState,
    /// `None` once torn down.
    tenure: Option<PanelTenure>,
}

impl PanelSequencer {
    /// Mount at panel 0 with both reveal flags cleared and panel 0's timers armed.
    #[must_use]
    pub fn mount(table: PanelTable) -> Self {
        let tenure = PanelTenure::enter(table.get(0));
        debug!(panels = table.len(), "Panel sequencer mounted");
        Self {
            table,
            state: SequenceState::at(0),
            tenure: Some(tenure),
        }
    }

    /// Move to the next panel, wrapping from the last back to the first.
    ///
    /// Cancels the outgoing panel's timers, clears both reveal flags and arms
    /// the incoming panel's timers, in that order. A torn-down sequencer
    /// ignores the call.
    pub fn advance(&mut self) -> SequenceState {
        if self.tenure.is_none() {
            return self.state;
        }
        let next = (self.state.panel_index + 1) % self.table.len();
        self.enter(next);
        info!(panel = next, "Advanced to panel");
        self.state
    }

    /// Return to panel 0 with a fresh tenure.
    pub fn reset(&mut self) -> SequenceState {
        if self.tenure.is_none() {
            return self.state;
        }
        self.enter(0);
        info!("Sequence reset to first panel");
        self.state
    }

    fn enter(&mut self, index: usize) {
        // End the old tenure before anything else touches state.
        drop(self.tenure.take());
        self.state = SequenceState::at(index);
        self.tenure = Some(PanelTenure::enter(self.table.get(index)));
    }

    /// Advance the clock by `delta`, applying any reveal whose delay elapsed.
    ///
    /// Returns the reveals that changed a flag on this call.
    pub fn tick(&mut self, delta: Duration) -> Vec<Reveal> {
        let Some(tenure) = self.tenure.as_mut() else {
            return Vec::new();
        };
        debug_assert_eq!(tenure.panel_index(), self.state.panel_index);

        let panel = self.state.panel_index;
        let mut changed = Vec::new();
        for reveal in tenure.advance(delta) {
            if self.state.reveal(reveal) {
                debug!(reveal = reveal.as_str(), panel, "Reveal fired");
                changed.push(reveal);
            }
        }
        changed
    }

    /// Cancel a pending reveal for the current panel without changing panels.
    pub fn cancel(&mut self, reveal: Reveal) {
        if let Some(tenure) = self.tenure.as_mut() {
            tenure.cancel(reveal);
        }
    }

    /// Cancel every pending timer. Idempotent; later calls to
    /// [`advance`](Self::advance), [`reset`](Self::reset) and
    /// [`tick`](Self::tick) become no-ops.
    pub fn teardown(&mut self) {
        if self.tenure.take().is_some() {
            debug!(panel = self.state.panel_index, "Panel sequencer torn down");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.tenure.is_some()
    }

    #[must_use]
    pub fn state(&self) -> SequenceState {
        self.state
    }

    #[must_use]
    pub fn current_panel(&self) -> &PanelSpec {
        self.table.get(self.state.panel_index)
    }

    #[must_use]
    pub fn table(&self) -> &PanelTable {
        &self.table
    }

    /// Time left before `reveal` fires on the current panel, if it is armed.
    #[must_use]
    pub fn pending(&self, reveal: Reveal) -> Option<Duration> {
        self.tenure.as_ref().and_then(|tenure| tenure.pending(reveal))
    }
}

impl Drop for PanelSequencer {
    fn drop(&mut self) {
        self.teardown();
    }
}
