//! Error types for faqbot.
//!
//! One unified error enum covers every failure category in the pipeline:
//! configuration, document loading, retrieval, generation, and I/O.

use thiserror::Error;

/// Unified error type for faqbot.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// There is no local recovery anywhere in the pipeline: construction
/// failures abort before any query can run, and per-query failures abort
/// that query only, leaving the index intact.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid configuration, including an unknown retriever name.
    /// Raised at construction time, before any network call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown model name. Raised at construction time, before any
    /// network call.
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    /// Document source unreachable or its payload malformed. Raised at
    /// construction, before the index is built.
    #[error("Document load error: {0}")]
    DocumentLoad(String),

    /// Query issued against an unbuilt index. A `Retriever` cannot be
    /// constructed without a built index, so no code path currently
    /// produces this variant.
    #[error("Search index not initialized: {0}")]
    NotInitialized(String),

    /// Model call failure: authentication, network, quota, or an
    /// unparseable completion.
    #[error("Generation error: {0}")]
    Generation(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
