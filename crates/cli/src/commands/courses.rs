//! Courses command handler.
//!
//! Lists the course identifiers accepted by `ask --course`.

use clap::Args;
use faqbot_core::{config::AppConfig, AppResult};
use faqbot_search::fetch_documents;

/// List the courses available in the document source
#[derive(Args, Debug)]
pub struct CoursesCommand {}

impl CoursesCommand {
    /// Execute the courses command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing courses command");

        let documents = fetch_documents(&config.docs_url).await?;

        // Count per course, preserving first-seen order
        let mut courses: Vec<(String, usize)> = Vec::new();
        for doc in &documents {
            match courses.iter_mut().find(|(course, _)| *course == doc.course) {
                Some((_, count)) => *count += 1,
                None => courses.push((doc.course.clone(), 1)),
            }
        }

        for (course, count) in &courses {
            println!("{} ({} documents)", course, count);
        }

        Ok(())
    }
}
