//! Booking form rendering

use super::field_renderer::{
    draw_error_line, draw_field, draw_help_text, field_height, shake_offset, ERROR_LINE_HEIGHT,
};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::presenter::ScrollTarget;
use crate::state::{BookingForm, Form, SubmitControl};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows a field needs, including its error line when annotated
fn row_height(form: &BookingForm, index: usize) -> u16 {
    form.get_field(index).map_or(0, |field| {
        let error = if field.annotation.is_some() {
            ERROR_LINE_HEIGHT
        } else {
            0
        };
        field_height(field) + error
    })
}

/// Field to keep in view: a pending scroll request wins over focus
pub fn scroll_anchor(form: &BookingForm, target: Option<&ScrollTarget>) -> usize {
    match target {
        Some(ScrollTarget::Field(name)) => form.index_of(name).unwrap_or(form.active_field()),
        // the banner sits above the first field
        Some(ScrollTarget::ErrorBanner) => 0,
        None => form.active_field(),
    }
}

/// First field to draw so that `anchor` fits in `height` rows
pub fn first_visible(form: &BookingForm, anchor: usize, height: u16) -> usize {
    let mut used = 0u16;
    let mut first = anchor;
    for index in (0..=anchor).rev() {
        used = used.saturating_add(row_height(form, index));
        if used > height && index != anchor {
            break;
        }
        first = index;
    }
    first
}

/// Draw the booking form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App, form: &BookingForm, submit: &SubmitControl) {
    let block = Block::default()
        .title(" Request a Booking ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help
        ])
        .margin(1)
        .split(inner);

    draw_fields(frame, chunks[0], app, form);

    let button_area = Rect {
        width: chunks[1].width.min(30),
        ..chunks[1]
    };
    render_submit_button(frame, button_area, submit, app.frame);

    draw_help_text(
        frame,
        chunks[2],
        &format!("Tab/Shift+Tab: move | Enter or {SUBMIT_SHORTCUT}: submit | Esc: quit"),
    );
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App, form: &BookingForm) {
    let focused = form.active_field();
    let anchor = scroll_anchor(form, app.controller.scroll_target());
    let mut y = area.y;
    let bottom = area.y + area.height;

    for index in first_visible(form, anchor, area.height)..form.field_count() {
        let Some(field) = form.get_field(index) else {
            break;
        };
        let height = field_height(field);
        if y + height > bottom {
            break;
        }

        let shake = shake_offset(field, app.frame);
        let field_area = Rect {
            x: area.x + shake,
            y,
            width: area.width.saturating_sub(shake),
            height,
        };
        draw_field(frame, field_area, field, index == focused);
        y += height;

        if let Some(annotation) = field.annotation.as_ref() {
            if y + ERROR_LINE_HEIGHT > bottom {
                break;
            }
            let error_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: ERROR_LINE_HEIGHT,
            };
            draw_error_line(frame, error_area, &annotation.message);
            y += ERROR_LINE_HEIGHT;
        }
    }
}
