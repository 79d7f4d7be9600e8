//! Full-screen loading indicator shown while a page is fetched.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SIMPLE_FRAMES: &[&str] = &["|", "/", "-", "\\"];
const DOTS_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// The spinner animation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerStyle {
    /// Braille dots spinner (default).
    #[default]
    Braille,
    /// ASCII spinner for terminals without Unicode fonts.
    Simple,
    /// Dots spinner.
    Dots,
}

impl SpinnerStyle {
    /// Parse a style name from the config file; unknown names fall back to braille.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "simple" | "ascii" => SpinnerStyle::Simple,
            "dots" => SpinnerStyle::Dots,
            _ => SpinnerStyle::Braille,
        }
    }

    /// Get the frames for this spinner style.
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Braille => BRAILLE_FRAMES,
            SpinnerStyle::Simple => SIMPLE_FRAMES,
            SpinnerStyle::Dots => DOTS_FRAMES,
        }
    }
}

/// A loading indicator with an animated spinner.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    message: String,
    frame: usize,
    style: SpinnerStyle,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new(SpinnerStyle::default())
    }
}

impl LoadingIndicator {
    /// Create a loading indicator with the default message.
    pub fn new(style: SpinnerStyle) -> Self {
        Self {
            message: "Fetching data...".to_string(),
            frame: 0,
            style,
        }
    }

    /// Set the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.frame = 0;
    }

    /// Get the current message.
    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advance the spinner animation. Called on each tick.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % self.style.frames().len();
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        self.style.frames()[self.frame]
    }

    /// The spinner and message as one line.
    pub fn text(&self) -> String {
        format!("{} {}", self.spinner_frame(), self.message)
    }

    /// Render over the whole `area`, hiding everything beneath it.
    pub fn render_blocking(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

        let width = (self.message.chars().count() as u16 + 10).min(area.width);
        let height = 5.min(area.height);
        let card = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        let paragraph = Paragraph::new(format!("\n{}", self.text()))
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.muted)),
            );
        frame.render_widget(paragraph, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_style_frames() {
        assert_eq!(SpinnerStyle::Braille.frames().len(), 10);
        assert_eq!(SpinnerStyle::Simple.frames().len(), 4);
        assert_eq!(SpinnerStyle::Dots.frames().len(), 8);
    }

    #[test]
    fn test_spinner_style_from_name() {
        assert_eq!(SpinnerStyle::from_name("simple"), SpinnerStyle::Simple);
        assert_eq!(SpinnerStyle::from_name("ASCII"), SpinnerStyle::Simple);
        assert_eq!(SpinnerStyle::from_name("dots"), SpinnerStyle::Dots);
        assert_eq!(SpinnerStyle::from_name("whatever"), SpinnerStyle::Braille);
    }

    #[test]
    fn test_default_message() {
        let loader = LoadingIndicator::default();
        assert_eq!(loader.message(), "Fetching data...");
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut loader = LoadingIndicator::new(SpinnerStyle::Simple);
        let first = loader.spinner_frame();
        loader.tick();
        assert_ne!(loader.spinner_frame(), first);

        for _ in 0..3 {
            loader.tick();
        }
        assert_eq!(loader.spinner_frame(), first);
    }

    #[test]
    fn test_set_message_resets_frame() {
        let mut loader = LoadingIndicator::new(SpinnerStyle::Simple);
        loader.tick();
        loader.set_message("Fetching page 4...");
        assert_eq!(loader.spinner_frame(), "|");
        assert_eq!(loader.text(), "| Fetching page 4...");
    }
}
