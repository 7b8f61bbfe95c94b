//! LLM integration crate for faqbot.
//!
//! Provides a provider-agnostic abstraction for chat completions. Supported
//! models form a closed allowlist, validated before any network call.
//!
//! # Example
//! ```no_run
//! use faqbot_llm::{create_client, LlmRequest, ModelId, OpenAiConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let model = ModelId::parse("gpt-4o")?;
//! let client = create_client(model, OpenAiConfig::default())?;
//! let request = LlmRequest::new("Hello, world!", model.as_str());
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{OpenAiClient, OpenAiConfig};
pub use types::ModelId;
