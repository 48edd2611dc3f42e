/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disable entry animations and the snowfall overlay.
    pub reduced_motion: bool,
    /// Draw the ambient snowfall behind the panels.
    pub snow: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            snow: true,
        }
    }
}

impl UiOptions {
    /// Whether the ambient overlay should be drawn at all.
    #[must_use]
    pub fn snow_enabled(self) -> bool {
        self.snow && !self.reduced_motion
    }
}
