//! Application state and key handling

use crate::controller::BookingController;
use crate::state::Form;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Controller bound to the booking form
    pub controller: BookingController,
    /// Whether the app should quit
    quit: bool,
    /// Redraw counter, drives the spinner and the shake
    pub frame: usize,
}

impl App {
    pub fn new(controller: BookingController) -> Self {
        Self {
            controller,
            quit: false,
            frame: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance animations, apply finished submissions and due timers
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.controller.tick();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.controller.submit();
            }
            KeyCode::Esc => {
                let banner_shown = self
                    .controller
                    .notices()
                    .is_some_and(|n| n.banner.is_some());
                if banner_shown {
                    self.controller.dismiss_banner();
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.controller.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.controller.move_focus(false),
            KeyCode::Enter => {
                if self.active_is_multiline() {
                    self.edit(|value| value.push('\n'));
                } else {
                    self.controller.submit();
                }
            }
            KeyCode::Char(c) => self.edit(|value| value.push(c)),
            KeyCode::Backspace => self.edit(|value| {
                value.pop();
            }),
            _ => {}
        }
    }

    fn active_is_multiline(&self) -> bool {
        self.controller
            .form()
            .and_then(|form| form.get_field(form.active_field()))
            .is_some_and(|field| field.is_multiline())
    }

    /// Apply `change` to the focused field's value and fire `Input`
    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        let Some(form) = self.controller.form().filter(|f| f.visible) else {
            return;
        };
        let Some(field) = form.get_field(form.active_field()) else {
            return;
        };
        let name = field.name.clone();
        let mut value = field.value().to_string();
        change(&mut value);
        self.controller.input(&name, &value);
    }
}
