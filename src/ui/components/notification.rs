//! Toast notifications for transient feedback.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// The type of notification, which determines its appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Success message (green).
    Success,
    /// Warning message (yellow).
    Warning,
    /// Error message (red).
    Error,
}

impl NotificationType {
    /// Get the icon for this notification type.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Success => "✓",
            NotificationType::Warning => "⚠",
            NotificationType::Error => "✗",
        }
    }

    /// Get the color for this notification type.
    pub fn color(&self) -> Color {
        match self {
            NotificationType::Success => Color::Green,
            NotificationType::Warning => Color::Yellow,
            NotificationType::Error => Color::Red,
        }
    }

    fn duration(&self) -> Duration {
        match self {
            NotificationType::Success => Duration::from_secs(3),
            NotificationType::Warning | NotificationType::Error => Duration::from_secs(5),
        }
    }
}

/// A single notification message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message.
    pub message: String,
    /// The type of notification.
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    /// Create a notification with the default duration for its type.
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    /// Override how long the notification is shown.
    #[cfg(test)]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// A bounded queue of notifications, oldest dropped first.
#[derive(Debug)]
pub struct NotificationManager {
    notifications: VecDeque<Notification>,
    max_visible: usize,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationManager {
    /// Create a manager showing at most three notifications.
    pub fn new() -> Self {
        Self::with_max_visible(3)
    }

    /// Create a manager with a custom max visible count.
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            notifications: VecDeque::new(),
            max_visible,
        }
    }

    /// Add a notification to the queue.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        while self.notifications.len() > self.max_visible {
            self.notifications.pop_front();
        }
    }

    /// Add a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Success));
    }

    /// Add a warning notification.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Warning));
    }

    /// Add an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationType::Error));
    }

    /// Remove expired notifications. Called on each tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get an iterator over the notifications, oldest first.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Render the notifications stacked in the bottom-right corner.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 44.min(area.width.saturating_sub(2));
        let mut bottom = area.y + area.height.saturating_sub(1);

        for notification in self.notifications.iter().rev() {
            // One line of text plus borders
            let height = 3;
            if bottom < area.y + height {
                break;
            }
            bottom -= height;
            let rect = Rect::new(
                area.x + area.width.saturating_sub(width + 1),
                bottom,
                width,
                height,
            );
            render_notification(notification, frame, rect);
        }
    }
}

fn render_notification(notification: &Notification, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let style = Style::default().fg(notification.notification_type.color());
    let text = Line::from(vec![
        Span::styled(
            format!("{} ", notification.notification_type.icon()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(notification.message.as_str(), style),
    ]);

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let n = Notification::new("ok", NotificationType::Success);
        assert_eq!(n.duration, Duration::from_secs(3));
        let n = Notification::new("bad", NotificationType::Error);
        assert_eq!(n.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_notification_is_expired() {
        let n = Notification::new("Test", NotificationType::Success)
            .with_duration(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(5));
        assert!(n.is_expired());
    }

    #[test]
    fn test_notification_not_expired() {
        let n = Notification::new("Test", NotificationType::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_manager_drops_oldest() {
        let mut manager = NotificationManager::with_max_visible(2);
        manager.success("1");
        manager.warning("2");
        manager.error("3");
        let messages: Vec<&str> = manager.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["2", "3"]);
    }

    #[test]
    fn test_manager_tick_removes_expired() {
        let mut manager = NotificationManager::new();
        manager.push(
            Notification::new("Expires", NotificationType::Success)
                .with_duration(Duration::from_millis(1)),
        );
        manager.success("Stays");
        std::thread::sleep(Duration::from_millis(5));
        manager.tick();
        assert_eq!(manager.iter().count(), 1);
        assert_eq!(manager.iter().next().unwrap().message, "Stays");
    }
}
