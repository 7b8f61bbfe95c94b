//! Command handlers for the faqbot CLI.

mod ask;
mod courses;

pub use ask::AskCommand;
pub use courses::CoursesCommand;
