//! Input validation and formatting
//!
//! Everything here is pure: it reads values and returns verdicts, leaving
//! annotations to the presenter.

pub mod datetime;
pub mod field_validator;
mod patterns;
pub mod phone;

pub use field_validator::validate;
pub use patterns::ValidationPattern;
pub use phone::{digits_only, format_phone};
