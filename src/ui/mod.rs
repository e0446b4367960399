//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod notices;

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let controller = &app.controller;
    let now = controller.now();
    let shown = controller.notices();
    let banner = shown.and_then(|n| n.banner.as_ref());

    let banner_height = if banner.is_some() {
        notices::BANNER_HEIGHT
    } else {
        0
    };
    let (banner_area, body_area, status_area) = layout::create_layout(frame.area(), banner_height);

    if let Some(banner) = banner {
        notices::draw_banner(frame, banner_area, banner, now);
    }

    match (controller.form(), controller.submit_control()) {
        (Some(form), Some(submit)) if form.visible => {
            forms::draw_booking_form(frame, body_area, app, form, submit);
        }
        (Some(_), Some(_)) => {
            if let Some(panel) = shown.and_then(|n| n.success.as_ref()) {
                notices::draw_success_panel(frame, body_area, panel, now);
            }
        }
        _ => {
            let message = Paragraph::new("Booking form not found")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, body_area);
        }
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MockSubmissionChannel;
    use crate::controller::BookingController;
    use crate::state::{HostForm, ManualClock};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app(host: Option<HostForm>) -> App {
        let mut channel = MockSubmissionChannel::new();
        channel
            .expect_endpoint()
            .return_const("http://test.invalid/api/bookings".to_string());
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        App::new(BookingController::bind(
            host,
            Arc::new(channel),
            Arc::new(ManualClock::new(now)),
        ))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_form_is_drawn_with_button() {
        let screen = render(&app(Some(HostForm::booking())));
        assert!(screen.contains("Full Name"));
        assert!(screen.contains("Request Booking"));
    }

    #[test]
    fn test_inline_error_is_drawn() {
        let mut app = app(Some(HostForm::booking()));
        app.controller.leave_field("email");
        let screen = render(&app);
        assert!(screen.contains("This field is required"));
    }

    #[test]
    fn test_inert_controller_draws_placeholder() {
        let screen = render(&app(None));
        assert!(screen.contains("Booking form not found"));
        assert!(screen.contains("booking form unavailable"));
    }
}
