//! Theme and styling configuration.

use ratatui::style::Color;

/// Color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Titles, spinner and focused borders.
    pub accent: Color,
    /// Checked checkboxes and selected rows.
    pub selected: Color,
    /// Cursor row background.
    pub highlight: Color,
    /// Hints, borders and disabled controls.
    pub muted: Color,
    /// Error panel.
    pub error: Color,
}

impl Theme {
    /// The dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Reset,
            accent: Color::Cyan,
            selected: Color::Green,
            highlight: Color::DarkGray,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::Reset,
            accent: Color::Blue,
            selected: Color::Green,
            highlight: Color::Gray,
            muted: Color::Gray,
            error: Color::Red,
        }
    }

    /// Look up a theme by its config name; unknown names get the dark theme.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
