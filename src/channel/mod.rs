//! Submission channel module for delivering booking requests

mod client;
mod traits;

pub use client::HttpSubmissionChannel;
pub use traits::SubmissionChannel;

#[cfg(test)]
pub use traits::MockSubmissionChannel;
