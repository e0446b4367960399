//! Controller state module

mod clock;
mod forms;
mod scheduler;
mod submission;

pub use clock::*;
pub use forms::*;
pub use scheduler::*;
pub use submission::*;
