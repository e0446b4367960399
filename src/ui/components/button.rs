//! Button component for TUI

use crate::state::SubmitControl;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Spinner frames shown while a submission is in flight
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render a generic button with border
fn render_button(frame: &mut Frame, area: Rect, content: &str, is_enabled: bool) {
    let border_style = if is_enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_enabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Text on the submit button; the label gets a spinner while loading
pub fn submit_button_content(control: &SubmitControl, frame_no: usize) -> String {
    if control.loading {
        format!("{} {}", SPINNER[frame_no % SPINNER.len()], control.label)
    } else {
        control.label.clone()
    }
}

/// Render the form's submit control
pub fn render_submit_button(frame: &mut Frame, area: Rect, control: &SubmitControl, frame_no: usize) {
    let content = submit_button_content(control, frame_no);
    render_button(frame, area, &content, !control.disabled);
}
