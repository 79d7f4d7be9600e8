//! Contextual key hint bar.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::Theme;

/// Render one line of key hints for the given context.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext, theme: &Theme) {
    let spans = parse_hints_to_spans(get_context_hints(context), theme);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split hint text into spans, styling bracketed keys with the accent color.
fn parse_hints_to_spans(hints: &str, theme: &Theme) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme.accent);
    let text_style = Style::default().fg(theme.muted);

    let mut spans = Vec::new();
    let mut rest = hints;
    while let Some(start) = rest.find('[') {
        let Some(len) = rest[start..].find(']') else {
            break;
        };
        if start > 0 {
            spans.push(Span::styled(rest[..start].to_string(), text_style));
        }
        let end = start + len + 1;
        spans.push(Span::styled(rest[start..end].to_string(), key_style));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hints: &str) -> Vec<String> {
        parse_hints_to_spans(hints, &Theme::default())
            .into_iter()
            .map(|s| s.content.into_owned())
            .collect()
    }

    #[test]
    fn test_parse_hints_simple() {
        assert_eq!(parse("[j/k] move"), vec!["[j/k]", " move"]);
    }

    #[test]
    fn test_parse_hints_multiple_keys() {
        assert_eq!(
            parse("[a] page  [s] select N"),
            vec!["[a]", " page  ", "[s]", " select N"]
        );
    }

    #[test]
    fn test_parse_hints_empty() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_hints_unclosed_bracket() {
        assert_eq!(parse("text [oops"), vec!["text [oops"]);
    }
}
