//! FAQ retrieval and answering for faqbot.
//!
//! Document acquisition, in-memory keyword indexing, query-time retrieval
//! with filtering and field boosting, and the RAG pipeline tying them to
//! the prompt and LLM crates.

pub mod index;
pub mod pipeline;
pub mod retriever;
pub mod source;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use index::{MiniSearchIndex, SearchIndex};
pub use pipeline::{AssistantOptions, FaqAssistant};
pub use retriever::{Retriever, RetrieverKind};
pub use source::fetch_documents;
pub use types::{CourseGroup, Document, RawDocument};
