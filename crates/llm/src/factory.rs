//! LLM client factory.
//!
//! Maps a validated model identifier to a concrete client implementation.

use crate::client::LlmClient;
use crate::providers::{OpenAiClient, OpenAiConfig};
use crate::types::ModelId;
use faqbot_core::AppResult;
use std::sync::Arc;

/// Create an LLM client for a validated model.
///
/// `model` has already passed the allowlist at parse time, so the match is
/// exhaustive over the closed enum. Adding a backend means adding a variant
/// to [`ModelId`] and an arm here.
///
/// A missing API key in `config` is not checked here; it surfaces as an
/// authentication failure from the provider on the first call.
pub fn create_client(model: ModelId, config: OpenAiConfig) -> AppResult<Arc<dyn LlmClient>> {
    match model {
        ModelId::Gpt4o => {
            tracing::info!("Creating llm client: OpenAI {}", model);
            Ok(Arc::new(OpenAiClient::new(config)))
        }
    }
}
