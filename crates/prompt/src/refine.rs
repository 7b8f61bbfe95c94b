//! Response refinement.
//!
//! Classifies the raw model completion as "no answer found" vs. a real
//! answer and renders the user-facing output accordingly.

use std::fmt;

/// Literal the model emits when the context does not contain the answer.
///
/// The comparison is exact and case-sensitive, with no whitespace
/// tolerance beyond what the prompt builder already trimmed. Loosening it
/// would change observable behavior.
pub const NO_ANSWER_SENTINEL: &str = "NONE";

/// The refined, user-facing outcome of one query.
///
/// Two terminal classifications, no intermediate states. The raw answer's
/// lifetime ends here; this is the sole externally visible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefinedResponse {
    /// The model answered from the context.
    Found {
        /// The raw completion text, passed through unchanged
        answer: String,
    },

    /// The model signalled that the context holds no answer.
    NotFound {
        /// The full retrieval context, echoed back verbatim (possibly empty)
        context: String,
    },
}

/// Classify a raw completion against the sentinel.
///
/// Pure classification: no retry, no re-querying the model.
pub fn refine(raw_answer: &str, context: &str) -> RefinedResponse {
    if raw_answer == NO_ANSWER_SENTINEL {
        RefinedResponse::NotFound {
            context: context.to_string(),
        }
    } else {
        RefinedResponse::Found {
            answer: raw_answer.to_string(),
        }
    }
}

impl fmt::Display for RefinedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { answer } => write!(f, "Answer:\n\n{}", answer),
            Self::NotFound { context } => write!(
                f,
                "I couldn't find the answer to that question within the provided context.\nContext:\n\n{}",
                context
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_yields_not_found() {
        let context = "section: General\nquestion: q\nanswer: a\n\n";
        let refined = refine("NONE", context);

        assert_eq!(
            refined,
            RefinedResponse::NotFound {
                context: context.to_string()
            }
        );

        let rendered = refined.to_string();
        assert!(rendered
            .starts_with("I couldn't find the answer to that question within the provided context."));
        assert!(rendered.contains("Context:\n\n"));
        // The context is echoed verbatim
        assert!(rendered.ends_with(context));
    }

    #[test]
    fn test_sentinel_with_empty_context() {
        let rendered = refine("NONE", "").to_string();
        assert_eq!(
            rendered,
            "I couldn't find the answer to that question within the provided context.\nContext:\n\n"
        );
    }

    #[test]
    fn test_real_answer_yields_found() {
        let refined = refine("anything else", "ctx");
        assert_eq!(
            refined,
            RefinedResponse::Found {
                answer: "anything else".to_string()
            }
        );

        let rendered = refined.to_string();
        assert_eq!(rendered, "Answer:\n\nanything else");
        assert!(!rendered.contains("couldn't find"));
        assert!(!rendered.contains("ctx"));
    }

    #[test]
    fn test_sentinel_is_exact() {
        // Case-sensitive, whitespace-sensitive: these are all real answers
        assert!(matches!(refine("none", "c"), RefinedResponse::Found { .. }));
        assert!(matches!(refine("None", "c"), RefinedResponse::Found { .. }));
        assert!(matches!(refine(" NONE", "c"), RefinedResponse::Found { .. }));
        assert!(matches!(refine("NONE.", "c"), RefinedResponse::Found { .. }));
    }
}
