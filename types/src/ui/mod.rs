//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod options;
mod panel;

pub use options::UiOptions;
pub use panel::{AnimPhase, PanelEffect, PanelEffectKind};
