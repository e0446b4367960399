//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `booking_form`: The booking request form

mod booking_form;
mod field_renderer;

pub use booking_form::draw as draw_booking_form;
