//! Ask command handler.
//!
//! Runs the full pipeline for one question and prints the refined
//! response to stdout.

use clap::Args;
use faqbot_core::{config::AppConfig, AppResult};
use faqbot_llm::{ModelId, OpenAiConfig};
use faqbot_search::{AssistantOptions, FaqAssistant, RetrieverKind};

/// Ask a question against the FAQ database
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Restrict retrieval to a single course (e.g. data-engineering-zoomcamp)
    #[arg(long)]
    pub course: Option<String>,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        // Validate both backend names before touching the network
        let retriever = RetrieverKind::parse(&config.retriever)?;
        let model = ModelId::parse(&config.model)?;

        let assistant = FaqAssistant::new(AssistantOptions {
            retriever,
            model,
            docs_url: config.docs_url.clone(),
            llm: OpenAiConfig {
                api_key: config.api_key.clone(),
                base_url: config.endpoint.clone(),
            },
        })
        .await?;

        let refined = assistant
            .answer(&self.question, self.course.as_deref())
            .await?;

        // The refined response is the command's data output
        println!("{}", refined);

        Ok(())
    }
}
