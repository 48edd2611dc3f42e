//! Frame-driven entry effects for panels and revealed content.

use std::time::Duration;

/// How a panel (or its revealed content) enters the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffectKind {
    /// Grow from the centre.
    ScaleIn,
    /// Rise from below.
    RiseIn,
    SlideInLeft,
    SlideInRight,
    /// Grow from the centre with a sideways wobble.
    SpinIn,
}

/// Where an effect is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

/// An entry effect that only moves when the frame loop hands it time.
#[derive(Debug, Clone)]
pub struct PanelEffect {
    kind: PanelEffectKind,
    shown_for: Duration,
    length: Duration,
}

impl PanelEffect {
    #[must_use]
    pub fn new(kind: PanelEffectKind, length: Duration) -> Self {
        Self {
            kind,
            shown_for: Duration::ZERO,
            length,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.shown_for = self.shown_for.saturating_add(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.shown_for >= self.length {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }

    /// Fraction of the effect already played, in `0.0..=1.0`. A zero-length
    /// effect is always complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.length.is_zero() {
            return 1.0;
        }
        (self.shown_for.as_secs_f32() / self.length.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn kind(&self) -> PanelEffectKind {
        self.kind
    }
}
