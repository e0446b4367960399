//! Error banner and success panel

use crate::presenter::{ErrorBanner, SuccessPanel};
use crate::state::Fade;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Rows taken by the error banner
pub const BANNER_HEIGHT: u16 = 3;

/// Base colour of a notice, dimmed as its fade progresses
fn faded(color: Color, fade: Option<&Fade>, now: Instant) -> Style {
    match fade.map(|f| f.progress(now)) {
        Some(p) if p >= 0.5 => Style::default().fg(Color::DarkGray),
        Some(_) => Style::default().fg(color).add_modifier(Modifier::DIM),
        None => Style::default().fg(color),
    }
}

/// Draw the error banner across the top of the form
pub fn draw_banner(frame: &mut Frame, area: Rect, banner: &ErrorBanner, now: Instant) {
    let style = faded(Color::Red, banner.fade.as_ref(), now);
    let line = Line::from(vec![
        Span::styled(&banner.message, style.add_modifier(Modifier::BOLD)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the success panel in place of the form
pub fn draw_success_panel(frame: &mut Frame, area: Rect, panel: &SuccessPanel, now: Instant) {
    let style = faded(Color::Green, panel.fade.as_ref(), now);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            SuccessPanel::TITLE,
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SuccessPanel::BODY, style)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
