//! Model identifiers.

use faqbot_core::{AppError, AppResult};

/// Closed set of supported chat models.
///
/// Model names are validated here, at construction time, before any network
/// call is made. Adding a backend is a variant addition, not a string
/// comparison buried in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelId {
    /// OpenAI gpt-4o chat model
    Gpt4o,
}

impl ModelId {
    /// Parse a model name, failing for anything outside the allowlist.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "gpt-4o" => Ok(Self::Gpt4o),
            other => Err(AppError::UnsupportedModel(other.to_string())),
        }
    }

    /// Get the canonical wire name of the model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt4o => "gpt-4o",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_model() {
        assert_eq!(ModelId::parse("gpt-4o").unwrap(), ModelId::Gpt4o);
        assert_eq!(ModelId::Gpt4o.as_str(), "gpt-4o");
    }

    #[test]
    fn test_parse_unknown_model() {
        let err = ModelId::parse("gpt-3.5-turbo").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedModel(_)));
        assert!(err.to_string().contains("gpt-3.5-turbo"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(ModelId::parse("GPT-4o").is_err());
    }
}
