//! Layout components (banner slot, body, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into banner, body and status bar
pub fn create_layout(area: Rect, banner_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(0),                // Form or success panel
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the status bar with the submission state and endpoint health
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    match app.controller.state() {
        Some(state) => {
            let color = if state.is_in_flight() {
                Color::Yellow
            } else {
                Color::Green
            };
            spans.push(Span::styled(" ● ", Style::default().fg(color)));
            spans.push(Span::styled(
                state.label(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        None => {
            spans.push(Span::styled(" ○ ", Style::default().fg(Color::Red)));
            spans.push(Span::styled(
                "booking form unavailable",
                Style::default().fg(Color::Red),
            ));
        }
    }

    spans.push(Span::styled(
        " | Ctrl+C: quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
