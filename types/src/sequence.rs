//! Observable sequencer state.

/// Snapshot of the sequencer handed to the renderer.
///
/// `continue_hint_visible` is only ever true on panel 0 and
/// `secondary_visible` only on panels that declare a secondary reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceState {
    pub panel_index: usize,
    pub secondary_visible: bool,
    pub continue_hint_visible: bool,
}

impl SequenceState {
    #[must_use]
    pub fn at(panel_index: usize) -> Self {
        Self {
            panel_index,
            ..Self::default()
        }
    }

    /// Apply a fired reveal. Returns whether the flag changed.
    pub fn reveal(&mut self, reveal: Reveal) -> bool {
        let flag = match reveal {
            Reveal::Secondary => &mut self.secondary_visible,
            Reveal::ContinueHint => &mut self.continue_hint_visible,
        };
        !std::mem::replace(flag, true)
    }
}

/// The two kinds of delayed content a panel can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reveal {
    Secondary,
    ContinueHint,
}

impl Reveal {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Reveal::Secondary => "secondary",
            Reveal::ContinueHint => "continue_hint",
        }
    }
}
