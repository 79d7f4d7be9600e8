//! Keyboard help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::components::centered_rect;
use crate::ui::theme::Theme;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
            ("g / G", "First / last row"),
            ("Space / x", "Toggle row"),
            ("a", "Select or deselect this page"),
            ("s", "Select first N rows of this page"),
            ("h / ← / p", "Previous page"),
            ("l / → / n", "Next page"),
        ],
    ),
    (
        "Errors",
        &[("r", "Retry the failed page"), ("Esc", "Back to last page")],
    ),
    (
        "Global",
        &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")],
    ),
];

/// Build the help text. `log_dir` is shown at the bottom when known.
fn help_lines(theme: &Theme, log_dir: Option<&str>) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(theme.selected);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::styled(title.to_string(), heading));
        for (keys, description) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", keys), key),
                Span::raw(description.to_string()),
            ]));
        }
        lines.push(Line::raw(""));
    }

    if let Some(dir) = log_dir {
        lines.push(Line::styled(
            format!("Logs: {}", dir),
            Style::default().fg(theme.muted),
        ));
    }
    lines
}

/// Render the help overlay centered in `area`.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme, log_dir: Option<&str>) {
    let lines = help_lines(theme, log_dir);
    let height = lines.len() as u16 + 2;
    let dialog = centered_rect(area, 60, height);

    frame.render_widget(Clear, dialog);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(paragraph, dialog);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_binding() {
        let lines = help_lines(&Theme::default(), None);
        let bindings: usize = SECTIONS.iter().map(|(_, b)| b.len()).sum();
        // one heading and one blank line per section
        assert_eq!(lines.len(), bindings + SECTIONS.len() * 2);
    }

    #[test]
    fn test_help_shows_log_dir() {
        let lines = help_lines(&Theme::default(), Some("/tmp/logs"));
        let last = lines.last().unwrap();
        let text: String = last.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Logs: /tmp/logs");
    }
}
