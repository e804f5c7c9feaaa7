use crate::ui::app::App;
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::list::{Item, MAX_PROGRESS};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HEART_RED, PROGRESS_FILL, PROGRESS_TRACK,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState as Selection};
use ratatui::Frame;

const PROGRESS_WIDTH: usize = 20;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    (header, body, footer)
}

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header_area, body, footer_area) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.state()), header_area);

    let rows: Vec<ListItem<'static>> = app
        .state()
        .items
        .iter()
        .map(|item| ListItem::new(row_line(item)))
        .collect();
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut selection = Selection::default().with_selected(app.selected_index());
    frame.render_stateful_widget(list, body, &mut selection);

    let selected = app.selected_id().and_then(|id| app.state().get(id));
    frame.render_widget(footer::widget(selected), footer_area);
}

/// One row: heart glyph, title, and a progress bar while animating.
pub fn row_line(item: &Item) -> Line<'static> {
    let heart = if item.is_hearted { "♥" } else { "♡" };
    let mut spans = vec![
        Span::styled(format!("{} ", heart), Style::default().fg(HEART_RED)),
        Span::styled(item.title.clone(), Style::default().fg(HEADER_TEXT)),
    ];

    if item.is_animating() {
        let filled = progress_cells(item.progress);
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(PROGRESS_FILL),
        ));
        spans.push(Span::styled(
            "░".repeat(PROGRESS_WIDTH - filled),
            Style::default().fg(PROGRESS_TRACK),
        ));
        spans.push(Span::styled(
            format!(" {:>3}%", item.progress),
            Style::default().fg(HEADER_TEXT),
        ));
    }

    Line::from(spans)
}

fn progress_cells(progress: u8) -> usize {
    usize::from(progress.min(MAX_PROGRESS)) * PROGRESS_WIDTH / usize::from(MAX_PROGRESS)
}
