//! Terminal event polling.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;
use crate::config::Settings;

/// Polls crossterm for terminal events, yielding [`Event::Tick`] when idle.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create an event handler ticking every `tick_rate_ms` milliseconds.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Create an event handler from the presentation settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_tick_rate(settings.tick_rate_ms)
    }

    /// The tick interval.
    #[cfg(test)]
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait for the next event, at most one tick.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            // Release and repeat events are reported on some platforms; act on presses only
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_tick_rate() {
        let handler = EventHandler::with_tick_rate(50);
        assert_eq!(handler.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            tick_rate_ms: 250,
            ..Default::default()
        };
        let handler = EventHandler::from_settings(&settings);
        assert_eq!(handler.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_default_uses_default_settings() {
        let handler = EventHandler::default();
        assert_eq!(
            handler.tick_rate(),
            Duration::from_millis(Settings::default().tick_rate_ms)
        );
    }
}
