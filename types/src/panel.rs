//! Static panel descriptions.
//!
//! A [`PanelTable`] is the only configuration the sequencer needs: which
//! panels exist, in what order, and which of them reveal extra content after
//! a delay. Adding or removing a panel is a data change.

use std::time::Duration;

use thiserror::Error;

use crate::content::{ContentCategory, ContentSelection};
use crate::ui::PanelEffectKind;

/// Where a piece of panel text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Fixed(String),
    Pick(ContentCategory),
}

impl TextSource {
    #[must_use]
    pub fn fixed(text: impl Into<String>) -> Self {
        TextSource::Fixed(text.into())
    }

    #[must_use]
    pub fn resolve<'a>(&'a self, selection: &'a ContentSelection) -> &'a str {
        match self {
            TextSource::Fixed(text) => text,
            TextSource::Pick(category) => selection.get(*category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkIcon {
    Globe,
    Github,
    Boxes,
    Book,
}

/// An outbound destination. Opaque to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub icon: LinkIcon,
    pub label: String,
    pub url: String,
}

impl Link {
    #[must_use]
    pub fn new(icon: LinkIcon, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Content shown only once the panel's secondary timer has fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryBlock {
    pub heading: Option<TextSource>,
    pub caption: Option<String>,
    pub links: Vec<Link>,
}

impl SecondaryBlock {
    #[must_use]
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            caption: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryReveal {
    pub delay: Duration,
    pub block: SecondaryBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSpec {
    index: usize,
    heading: Option<TextSource>,
    secondary: Option<SecondaryReveal>,
    continue_hint_delay: Option<Duration>,
    links: Vec<Link>,
    footnote: Option<String>,
    entry: PanelEffectKind,
}

impl PanelSpec {
    #[must_use]
    pub fn new(heading: Option<TextSource>) -> Self {
        Self {
            index: 0,
            heading,
            secondary: None,
            continue_hint_delay: None,
            links: Vec::new(),
            footnote: None,
            entry: PanelEffectKind::ScaleIn,
        }
    }

    #[must_use]
    pub fn with_secondary(mut self, delay: Duration, block: SecondaryBlock) -> Self {
        self.secondary = Some(SecondaryReveal { delay, block });
        self
    }

    #[must_use]
    pub fn with_continue_hint(mut self, delay: Duration) -> Self {
        self.continue_hint_delay = Some(delay);
        self
    }

    #[must_use]
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    #[must_use]
    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }

    #[must_use]
    pub fn with_entry(mut self, entry: PanelEffectKind) -> Self {
        self.entry = entry;
        self
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_first_panel(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn has_secondary_reveal(&self) -> bool {
        self.secondary.is_some()
    }

    #[must_use]
    pub fn secondary_delay(&self) -> Option<Duration> {
        self.secondary.as_ref().map(|reveal| reveal.delay)
    }

    #[must_use]
    pub fn secondary_block(&self) -> Option<&SecondaryBlock> {
        self.secondary.as_ref().map(|reveal| &reveal.block)
    }

    /// Delay before the continue hint appears. Only ever set on the first panel.
    #[must_use]
    pub fn continue_hint_delay(&self) -> Option<Duration> {
        self.continue_hint_delay
    }

    #[must_use]
    pub fn heading(&self) -> Option<&TextSource> {
        self.heading.as_ref()
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn footnote(&self) -> Option<&str> {
        self.footnote.as_deref()
    }

    #[must_use]
    pub fn entry(&self) -> PanelEffectKind {
        self.entry
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelTableError {
    #[error("panel table must contain at least one panel")]
    Empty,
    #[error("panel {index} declares a continue hint; only the first panel may")]
    ContinueHintOffFirstPanel { index: usize },
}

/// Ordered, validated panel list. Panel indices are assigned by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelTable {
    panels: Vec<PanelSpec>,
}

impl PanelTable {
    pub fn new(panels: Vec<PanelSpec>) -> Result<Self, PanelTableError> {
        if panels.is_empty() {
            return Err(PanelTableError::Empty);
        }

        let panels: Vec<PanelSpec> = panels
            .into_iter()
            .enumerate()
            .map(|(index, panel)| PanelSpec { index, ..panel })
            .collect();

        if let Some(panel) = panels
            .iter()
            .find(|panel| !panel.is_first_panel() && panel.continue_hint_delay.is_some())
        {
            return Err(PanelTableError::ContinueHintOffFirstPanel { index: panel.index });
        }

        Ok(Self { panels })
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)] // never empty by construction
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Panel at `index`, wrapping modulo the table length.
    #[must_use]
    pub fn get(&self, index: usize) -> &PanelSpec {
        &self.panels[index % self.panels.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelSpec> {
        self.panels.iter()
    }

    /// Return a copy with every secondary delay and the continue hint delay replaced.
    #[must_use]
    pub fn with_delays(mut self, secondary: Duration, continue_hint: Duration) -> Self {
        for panel in &mut self.panels {
            if let Some(reveal) = panel.secondary.as_mut() {
                reveal.delay = secondary;
            }
            if panel.continue_hint_delay.is_some() {
                panel.continue_hint_delay = Some(continue_hint);
            }
        }
        self
    }
}
