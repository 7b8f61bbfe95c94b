//! RAG answering pipeline.
//!
//! Wires the retrieval, prompt, and generation stages into the one
//! user-facing operation: answer a question from the FAQ collection.

use crate::retriever::{Retriever, RetrieverKind};
use crate::source;
use faqbot_core::AppResult;
use faqbot_llm::{create_client, LlmClient, LlmRequest, ModelId, OpenAiConfig};
use faqbot_prompt::{build_context, build_prompt, refine, ContextDocument, RefinedResponse};
use std::sync::Arc;

/// Construction parameters for the assistant.
///
/// Retriever and model are already-validated enum values; parsing their
/// string forms happens before construction, so an invalid name can never
/// reach the document fetch.
#[derive(Debug, Clone)]
pub struct AssistantOptions {
    /// Retriever backend
    pub retriever: RetrieverKind,

    /// Chat model
    pub model: ModelId,

    /// URL of the document source
    pub docs_url: String,

    /// Chat model provider configuration (credentials, endpoint)
    pub llm: OpenAiConfig,
}

/// The course FAQ assistant.
///
/// Built once per process: fetches the document collection, builds the
/// index, and creates the model client. Queries are synchronous with
/// respect to each other; the only shared state is the read-only index.
pub struct FaqAssistant {
    retriever: Retriever,
    client: Arc<dyn LlmClient>,
    model: ModelId,
}

impl FaqAssistant {
    /// Construct the assistant: fetch documents, build the index, create
    /// the LLM client.
    ///
    /// Any failure here aborts before a single query can run.
    pub async fn new(options: AssistantOptions) -> AppResult<Self> {
        let documents = source::fetch_documents(&options.docs_url).await?;
        let retriever = Retriever::build(options.retriever, documents)?;
        let client = create_client(options.model, options.llm)?;

        Ok(Self::from_parts(retriever, client, options.model))
    }

    /// Assemble an assistant from pre-built parts.
    ///
    /// Lets tests inject a scripted client and a locally built retriever.
    pub fn from_parts(retriever: Retriever, client: Arc<dyn LlmClient>, model: ModelId) -> Self {
        Self {
            retriever,
            client,
            model,
        }
    }

    /// Answer one question, optionally restricted to a single course.
    ///
    /// Retrieve, build context, build prompt, generate, refine. A failed
    /// generation yields no refined response for this query; the index
    /// stays intact for the next one.
    pub async fn answer(
        &self,
        question: &str,
        course_filter: Option<&str>,
    ) -> AppResult<RefinedResponse> {
        let results = self.retriever.retrieve(question, course_filter);
        tracing::debug!("Retrieved {} documents", results.len());

        let entries: Vec<ContextDocument<'_>> = results
            .iter()
            .map(|doc| ContextDocument {
                section: &doc.section,
                question: &doc.question,
                text: &doc.text,
            })
            .collect();
        let context = build_context(&entries);

        let prompt = build_prompt(question, &context)?;

        let request = LlmRequest::new(prompt, self.model.as_str());
        let response = self.client.complete(&request).await?;

        Ok(refine(&response.content, &context))
    }
}
