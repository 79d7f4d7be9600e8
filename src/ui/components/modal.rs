//! Modal dialog for selecting the first N rows of the page.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input::TextInput;
use crate::ui::theme::Theme;

/// Action returned from the bulk-select dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkSelectAction {
    /// Select with the raw text the user entered.
    Submit(String),
    /// Close without selecting.
    Cancel,
}

/// The "Custom Select" dialog: a count field with Select and Cancel.
#[derive(Debug)]
pub struct BulkSelectDialog {
    input: TextInput,
    visible: bool,
}

impl Default for BulkSelectDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl BulkSelectDialog {
    /// Create a hidden dialog.
    pub fn new() -> Self {
        Self {
            input: TextInput::new().with_placeholder("Number of rows"),
            visible: false,
        }
    }

    /// Open the dialog with an empty field.
    pub fn show(&mut self) {
        self.input.clear();
        self.visible = true;
    }

    /// Close the dialog and clear the field.
    pub fn hide(&mut self) {
        self.input.clear();
        self.visible = false;
    }

    /// Check if the dialog is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The text currently in the field.
    #[cfg(test)]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Handle keyboard input while visible.
    ///
    /// Enter submits and Esc cancels; both close the dialog.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BulkSelectAction> {
        match key.code {
            KeyCode::Enter => {
                let text = self.input.value().to_string();
                self.hide();
                Some(BulkSelectAction::Submit(text))
            }
            KeyCode::Esc => {
                self.hide();
                Some(BulkSelectAction::Cancel)
            }
            _ => {
                self.input.handle_input(key);
                None
            }
        }
    }

    /// Render the dialog centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            return;
        }

        let dialog_area = centered_rect(area, 36, 7);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(
                " Select rows ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let input_area = Rect::new(inner.x, inner.y, inner.width, 3.min(inner.height));
        self.input.render(frame, input_area, theme);

        if inner.height > 4 {
            let hint_area = Rect::new(inner.x, inner.y + 4, inner.width, 1);
            let hint = Paragraph::new(Span::styled(
                "Enter: Select   Esc: Cancel",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(hint, hint_area);
        }
    }
}

/// Calculate a centered rectangle within the given area.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_dialog_hidden() {
        let dialog = BulkSelectDialog::new();
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_submit_returns_text_and_closes() {
        let mut dialog = BulkSelectDialog::new();
        dialog.show();
        assert_eq!(dialog.handle_input(key(KeyCode::Char('1'))), None);
        assert_eq!(dialog.handle_input(key(KeyCode::Char('5'))), None);
        assert_eq!(dialog.value(), "15");

        let action = dialog.handle_input(key(KeyCode::Enter));
        assert_eq!(action, Some(BulkSelectAction::Submit("15".to_string())));
        assert!(!dialog.is_visible());
        assert_eq!(dialog.value(), "");
    }

    #[test]
    fn test_cancel_closes_and_clears() {
        let mut dialog = BulkSelectDialog::new();
        dialog.show();
        dialog.handle_input(key(KeyCode::Char('3')));

        let action = dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(action, Some(BulkSelectAction::Cancel));
        assert!(!dialog.is_visible());

        dialog.show();
        assert_eq!(dialog.value(), "");
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(area, 36, 7), Rect::new(32, 21, 36, 7));
    }

    #[test]
    fn test_centered_rect_small_area() {
        let area = Rect::new(2, 2, 10, 4);
        assert_eq!(centered_rect(area, 36, 7), Rect::new(2, 2, 10, 4));
    }
}
