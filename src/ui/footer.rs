use crate::ui::list::Item;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, HEART_RED, PROGRESS_FILL};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = "Space: heart │ K/J: move │ D: delete │ Q: quit";

/// Status of the selected row, followed by the key hints.
pub fn status_line(selected: Option<&Item>) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim = text_style.add_modifier(Modifier::DIM);
    let separator = Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR));

    let mut spans = vec![Span::raw(" ")];
    match selected {
        None => spans.push(Span::styled("no selection", dim)),
        Some(item) => {
            let (glyph, label) = if item.is_hearted {
                ("♥", "hearted")
            } else {
                ("♡", "not hearted")
            };
            spans.push(Span::styled(item.title.clone(), text_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(glyph, Style::default().fg(HEART_RED)));
            spans.push(Span::styled(format!(" {}", label), text_style));
            spans.push(separator.clone());
            if item.is_animating() {
                spans.push(Span::styled(
                    format!("toggling {}%", item.progress),
                    Style::default().fg(PROGRESS_FILL),
                ));
            } else {
                spans.push(Span::styled("idle", dim));
            }
        }
    }
    spans.push(separator);
    spans.push(Span::styled(HINTS, dim));
    Line::from(spans)
}

/// Bottom bar describing the selected row.
pub fn widget(selected: Option<&Item>) -> Paragraph<'static> {
    Paragraph::new(status_line(selected)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
