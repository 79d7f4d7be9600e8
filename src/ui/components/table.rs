//! Artwork table widget with selection checkboxes.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::{Artwork, ArtworkId};
use crate::model::SelectionSet;
use crate::ui::theme::Theme;

/// Column headers after the checkbox column.
pub const COLUMNS: [&str; 6] = ["Title", "Place", "Artist", "Inscriptions", "Start", "End"];

/// Checkbox glyph for a checked or unchecked row.
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Collapse embedded newlines so a cell stays one row tall.
pub fn single_line(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Renders one page of artworks.
pub struct ArtworkTable<'a> {
    records: &'a [Artwork],
    selection: &'a SelectionSet,
    theme: &'a Theme,
}

impl<'a> ArtworkTable<'a> {
    /// Create a table over the visible records.
    pub fn new(records: &'a [Artwork], selection: &'a SelectionSet, theme: &'a Theme) -> Self {
        Self {
            records,
            selection,
            theme,
        }
    }

    /// Whether the header checkbox is checked.
    pub fn header_checked(&self) -> bool {
        let ids: Vec<ArtworkId> = self.records.iter().map(|a| a.id).collect();
        self.selection.all_selected(&ids)
    }

    fn header(&self) -> Row<'static> {
        let style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let mut cells = vec![Cell::from(checkbox(self.header_checked()))];
        cells.extend(COLUMNS.iter().map(|&name| Cell::from(name)));
        Row::new(cells).style(style).bottom_margin(1)
    }

    fn row(&self, artwork: &Artwork) -> Row<'static> {
        let checked = self.selection.contains(artwork.id);
        let style = if checked {
            Style::default().fg(self.theme.selected)
        } else {
            Style::default().fg(self.theme.fg)
        };

        Row::new(vec![
            Cell::from(checkbox(checked)),
            Cell::from(single_line(&artwork.title)),
            Cell::from(single_line(artwork.place_display())),
            Cell::from(single_line(artwork.artist_display())),
            Cell::from(single_line(artwork.inscriptions_display())),
            Cell::from(artwork.date_start_display()),
            Cell::from(artwork.date_end_display()),
        ])
        .style(style)
    }

    /// Render the table, highlighting the row in `state`.
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut TableState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.muted));

        if self.records.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No artworks on this page",
                Style::default().fg(self.theme.muted),
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(26),
            Constraint::Percentage(12),
            Constraint::Percentage(26),
            Constraint::Percentage(20),
            Constraint::Length(6),
            Constraint::Length(6),
        ];

        let rows: Vec<Row> = self.records.iter().map(|a| self.row(a)).collect();
        let table = Table::new(rows, widths)
            .header(self.header())
            .block(block)
            .column_spacing(1)
            .highlight_style(
                Style::default()
                    .bg(self.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            single_line("Georges Seurat\nFrench, 1859-1891"),
            "Georges Seurat · French, 1859-1891"
        );
        assert_eq!(single_line("Plain"), "Plain");
        assert_eq!(single_line("a\n\n b \n"), "a · b");
    }

    #[test]
    fn test_header_checked() {
        let records = vec![Artwork::new(1, "a"), Artwork::new(2, "b")];
        let theme = Theme::default();
        let mut selection = SelectionSet::new();

        selection.toggle(1);
        assert!(!ArtworkTable::new(&records, &selection, &theme).header_checked());

        selection.toggle(2);
        assert!(ArtworkTable::new(&records, &selection, &theme).header_checked());
    }

    #[test]
    fn test_header_unchecked_for_empty_page() {
        let theme = Theme::default();
        let selection = SelectionSet::new();
        assert!(!ArtworkTable::new(&[], &selection, &theme).header_checked());
    }
}
