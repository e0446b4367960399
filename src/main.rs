//! Booking Form - terminal booking request form
//!
//! A Ratatui front end that validates a booking request as it is typed and
//! posts it to a booking endpoint.

mod app;
mod channel;
mod config;
mod controller;
mod error;
mod payload;
mod platform;
mod presenter;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use channel::HttpSubmissionChannel;
use config::BookingConfig;
use controller::BookingController;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::{HostForm, SystemClock};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Event poll interval; timers and finished submissions are picked up on each pass
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = BookingConfig::from_env()?;
    let channel = Arc::new(HttpSubmissionChannel::new(&config)?);
    let controller =
        BookingController::bind(Some(HostForm::booking()), channel, Arc::new(SystemClock));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    let result = run_app(&mut terminal, &mut app).await;

    // a request still on the wire would die with the runtime
    if app.controller.is_submitting() {
        tracing::info!("Waiting for the booking request in flight");
        if tokio::time::timeout(config.timeout(), app.controller.settle())
            .await
            .is_err()
        {
            tracing::warn!("Booking request still pending at exit");
        }
    }
    if let Some(reply) = app.controller.last_reply() {
        tracing::info!(%reply, "Last booking reply");
    }
    app.controller.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Give the submission task a turn
        tokio::task::yield_now().await;
    }
}
