//! The sequencer's single input port.

use serde::Deserialize;

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Surface,
    /// An outbound link, identified by its URL.
    Link(String),
}

/// Whether a click on a link also advances the sequence.
///
/// The landing page this mirrors lets link clicks bubble to the surface
/// handler, so both happen. `Suppress` keeps the sequence where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkClickPolicy {
    #[default]
    Advance,
    Suppress,
}

impl LinkClickPolicy {
    #[must_use]
    pub fn advances(self, target: &ClickTarget) -> bool {
        match (self, target) {
            (_, ClickTarget::Surface) | (LinkClickPolicy::Advance, ClickTarget::Link(_)) => true,
            (LinkClickPolicy::Suppress, ClickTarget::Link(_)) => false,
        }
    }
}

/// Screen cells occupied by a rendered link, recorded by the renderer each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub url: String,
}

impl LinkHitRegion {
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x.saturating_add(self.width)
    }
}
