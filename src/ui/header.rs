use crate::ui::list::ListState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, HEART_RED};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Summary line above the list: row, heart and animation counts.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ListState) -> Paragraph<'static> {
        let hearted = state.items.iter().filter(|item| item.is_hearted).count();
        let animating = state.items.iter().filter(|item| item.is_animating()).count();

        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(format!("{} items", state.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("♥ ", Style::default().fg(HEART_RED)),
            Span::styled(format!("{} hearted", hearted), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} animating", animating), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
