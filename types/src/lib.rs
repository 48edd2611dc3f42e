//! Core domain types for Lantern.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod content;
mod panel;
mod sequence;
pub mod ui;

pub use content::{ContentCategory, ContentPoolError, ContentPools, ContentSelection};
pub use panel::{
    Link, LinkIcon, PanelSpec, PanelTable, PanelTableError, SecondaryBlock, SecondaryReveal,
    TextSource,
};
pub use sequence::{Reveal, SequenceState};
