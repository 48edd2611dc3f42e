//! Color theme and glyphs for Lantern TUI.
//!
//! A night-sky palette (deep slate background, soft white text) with an
//! optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use lantern_engine::{LinkIcon, UiOptions};

/// Night-sky color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(17, 24, 39); // gray-900
    pub const BG_PANEL: Color = Color::Rgb(31, 41, 55); // gray-800

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 244, 246); // gray-100
    pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219); // gray-300
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175); // gray-400

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(96, 165, 250); // blue-400
    pub const GREEN: Color = Color::Rgb(74, 222, 128); // green-400
    pub const SNOW: Color = Color::Rgb(229, 231, 235); // gray-200
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub link: Color,
    pub link_alt: Color,
    pub snow: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            link: colors::BLUE,
            link_alt: colors::GREEN,
            snow: colors::SNOW,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            link: Color::Cyan,
            link_alt: Color::Green,
            snow: Color::DarkGray,
        }
    }

    /// Link color for `icon`; game servers get the alternate accent.
    #[must_use]
    pub fn link_color(&self, icon: LinkIcon) -> Color {
        match icon {
            LinkIcon::Boxes => self.link_alt,
            LinkIcon::Globe | LinkIcon::Github | LinkIcon::Book => self.link,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and the snow overlay.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub globe: &'static str,
    pub github: &'static str,
    pub boxes: &'static str,
    pub book: &'static str,
    pub continue_arrow: &'static str,
    pub snowflakes: &'static [&'static str],
}

impl Glyphs {
    #[must_use]
    pub fn link_icon(&self, icon: LinkIcon) -> &'static str {
        match icon {
            LinkIcon::Globe => self.globe,
            LinkIcon::Github => self.github,
            LinkIcon::Boxes => self.boxes,
            LinkIcon::Book => self.book,
        }
    }
}

const SNOWFLAKES: &[&str] = &["❄", "•", "·", "∗"];
const SNOWFLAKES_ASCII: &[&str] = &["*", ".", "'"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            globe: "@",
            github: "#",
            boxes: "[]",
            book: "=",
            continue_arrow: "v",
            snowflakes: SNOWFLAKES_ASCII,
        }
    } else {
        Glyphs {
            globe: "◎",
            github: "⌥",
            boxes: "▣",
            book: "▤",
            continue_arrow: "▼",
            snowflakes: SNOWFLAKES,
        }
    }
}

/// When `reduced_motion` is enabled the continue arrow stays put instead of bouncing.
#[must_use]
pub fn bounce_offset(tick: usize, options: UiOptions) -> u16 {
    const BOUNCE_PERIOD: usize = 40;
    if options.reduced_motion {
        0
    } else {
        u16::from((tick / (BOUNCE_PERIOD / 2)) % 2 == 1)
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn secondary_line(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn link(palette: &Palette, color: ratatui::style::Color) -> Style {
        Style::default()
            .fg(color)
            .bg(palette.bg_dark)
            .add_modifier(Modifier::UNDERLINED)
    }
}
