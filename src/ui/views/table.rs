//! The artwork table view.
//!
//! Owns the row cursor and turns table keys into [`TableAction`]s. Selection
//! and paging state live in the model and are passed in for rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, TableState},
    Frame,
};

use crate::api::Artwork;
use crate::model::{Pagination, SelectionSet};
use crate::ui::components::ArtworkTable;
use crate::ui::theme::Theme;

/// Intents produced by the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Toggle the row at this index of the current page.
    ToggleRow(usize),
    /// Select or deselect the whole visible page.
    TogglePage,
    /// Go to the previous page.
    PreviousPage,
    /// Go to the next page.
    NextPage,
    /// Open the bulk-select dialog.
    OpenBulkSelect,
}

/// The artwork table view.
#[derive(Debug, Default)]
pub struct TableView {
    table_state: TableState,
}

impl TableView {
    /// Create a new table view with the cursor on the first row.
    pub fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
        }
    }

    /// Index of the row under the cursor.
    pub fn cursor(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Move the cursor back to the top after a new page arrives.
    pub fn reset_cursor(&mut self) {
        self.table_state = TableState::default().with_selected(Some(0));
    }

    fn move_cursor(&mut self, index: usize) {
        self.table_state.select(Some(index));
    }

    /// Handle a key while the table has focus.
    ///
    /// `row_count` is the number of records on the current page.
    pub fn handle_input(&mut self, key: KeyEvent, row_count: usize) -> Option<TableAction> {
        let last = row_count.saturating_sub(1);
        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.move_cursor((self.cursor() + 1).min(last));
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.move_cursor(self.cursor().saturating_sub(1));
                None
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.move_cursor(0);
                None
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.move_cursor(last);
                None
            }
            (KeyCode::Char(' ') | KeyCode::Char('x'), KeyModifiers::NONE) if row_count > 0 => {
                Some(TableAction::ToggleRow(self.cursor().min(last)))
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) => Some(TableAction::TogglePage),
            (KeyCode::Char('h') | KeyCode::Char('p'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
                Some(TableAction::PreviousPage)
            }
            (KeyCode::Char('l') | KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
                Some(TableAction::NextPage)
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) => Some(TableAction::OpenBulkSelect),
            _ => None,
        }
    }

    /// Render the table and the pager beneath it.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        records: &[Artwork],
        selection: &SelectionSet,
        pagination: &Pagination,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        ArtworkTable::new(records, selection, theme).render(frame, chunks[0], &mut self.table_state);
        render_pager(frame, chunks[1], pagination, theme);
    }
}

/// Render "◀ Prev  Page X of Y  Next ▶", dimming disabled buttons.
fn render_pager(frame: &mut Frame, area: Rect, pagination: &Pagination, theme: &Theme) {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        button("◀ Prev", pagination.can_previous()),
        Span::raw("   "),
        Span::styled(page_label(pagination), Style::default().fg(theme.fg)),
        Span::raw("   "),
        button("Next ▶", pagination.can_next()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// The "Page X of Y" indicator.
fn page_label(pagination: &Pagination) -> String {
    format!(
        "Page {} of {}",
        pagination.current_page(),
        pagination.total_pages()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_movement_is_bounded() {
        let mut view = TableView::new();
        assert_eq!(view.cursor(), 0);

        view.handle_input(key(KeyCode::Char('k')), 3);
        assert_eq!(view.cursor(), 0);

        view.handle_input(key(KeyCode::Char('j')), 3);
        view.handle_input(key(KeyCode::Down), 3);
        view.handle_input(key(KeyCode::Down), 3);
        assert_eq!(view.cursor(), 2);

        view.handle_input(key(KeyCode::Char('g')), 3);
        assert_eq!(view.cursor(), 0);

        view.handle_input(key(KeyCode::Char('G')), 3);
        assert_eq!(view.cursor(), 2);
    }

    #[test]
    fn test_toggle_row_uses_cursor() {
        let mut view = TableView::new();
        view.handle_input(key(KeyCode::Char('j')), 5);
        assert_eq!(
            view.handle_input(key(KeyCode::Char(' ')), 5),
            Some(TableAction::ToggleRow(1))
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('x')), 5),
            Some(TableAction::ToggleRow(1))
        );
    }

    #[test]
    fn test_toggle_row_on_empty_page() {
        let mut view = TableView::new();
        assert_eq!(view.handle_input(key(KeyCode::Char(' ')), 0), None);
    }

    #[test]
    fn test_page_actions() {
        let mut view = TableView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('a')), 2),
            Some(TableAction::TogglePage)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Left), 2),
            Some(TableAction::PreviousPage)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('n')), 2),
            Some(TableAction::NextPage)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('s')), 2),
            Some(TableAction::OpenBulkSelect)
        );
    }

    #[test]
    fn test_reset_cursor() {
        let mut view = TableView::new();
        view.handle_input(key(KeyCode::Char('G')), 10);
        view.reset_cursor();
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(&Pagination::new()), "Page 1 of 1");
    }
}
