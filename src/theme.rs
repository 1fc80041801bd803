//! Dark and light palettes for the page chrome and content.
//!
//! The theme is a runtime toggle; every widget pulls its styles from the
//! active palette rather than hard-coding colors.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
/// Active color scheme.
pub enum Theme {
    /// Dark terminal palette (default).
    #[default]
    Dark,
    /// Light terminal palette.
    Light,
}

impl Theme {
    #[must_use]
    /// The other theme, for the runtime toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    /// Display label for the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    /// Styles for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                body: Style::default().fg(Color::Gray),
                heading: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                subheading: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Cyan),
                muted: Style::default().fg(Color::DarkGray),
                hero: Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            },
            Self::Light => Palette {
                body: Style::default().fg(Color::Black),
                heading: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                subheading: Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Blue),
                muted: Style::default().fg(Color::Gray),
                hero: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            },
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Resolved styles for the active theme.
pub struct Palette {
    /// Prose text.
    pub body: Style,
    /// Top-level section headings.
    pub heading: Style,
    /// Subsection headings.
    pub subheading: Style,
    /// Links, active entries, eyebrow labels.
    pub accent: Style,
    /// De-emphasized chrome (rules, inactive links).
    pub muted: Style,
    /// Hero banner text.
    pub hero: Style,
}
