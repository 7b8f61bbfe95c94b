//! Query-time retrieval.
//!
//! Wraps the search index with the fixed retrieval policy: field boosts,
//! top-5 limit, and an optional course filter.

use crate::index::{MiniSearchIndex, SearchIndex};
use crate::types::Document;
use faqbot_core::{AppError, AppResult};
use std::collections::HashMap;

/// Text fields the index is built over.
pub const TEXT_FIELDS: &[&str] = &["question", "text", "section"];

/// Keyword (categorical) fields the index is built over.
pub const KEYWORD_FIELDS: &[&str] = &["course"];

/// Boost applied to matches in the `question` field.
pub const QUESTION_BOOST: f32 = 3.0;

/// Boost applied to matches in the `section` field.
pub const SECTION_BOOST: f32 = 0.5;

/// Number of documents retrieved per query.
pub const NUM_RESULTS: usize = 5;

/// Closed set of supported retriever backends.
///
/// Validated at construction time, before any document is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrieverKind {
    /// In-memory TF-IDF keyword index
    Minisearch,
}

impl RetrieverKind {
    /// Parse a retriever name, failing for anything outside the allowlist.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "minisearch" => Ok(Self::Minisearch),
            other => Err(AppError::Config(format!("Invalid retriever: {}", other))),
        }
    }

    /// Get the canonical backend name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minisearch => "minisearch",
        }
    }
}

/// Retriever over the built index.
///
/// Construction builds the index, so a `Retriever` can never observe an
/// uninitialized one. The index is read-only for the retriever's lifetime.
pub struct Retriever {
    index: Box<dyn SearchIndex>,
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever").finish_non_exhaustive()
    }
}

impl Retriever {
    /// Build the index for the chosen backend over the full collection.
    pub fn build(kind: RetrieverKind, documents: Vec<Document>) -> AppResult<Self> {
        match kind {
            RetrieverKind::Minisearch => {
                tracing::info!("Indexing {} documents with minisearch", documents.len());
                let index = MiniSearchIndex::fit(documents, TEXT_FIELDS, KEYWORD_FIELDS)?;
                Ok(Self {
                    index: Box::new(index),
                })
            }
        }
    }

    /// Retrieve the top documents for a question.
    ///
    /// With a course filter, only documents of that course are eligible;
    /// without one, the whole collection is. Results come back in the
    /// index's relevance order, unchanged.
    pub fn retrieve(&self, query: &str, course_filter: Option<&str>) -> Vec<Document> {
        tracing::info!("Retrieving relevant content for question: {}", query);

        let mut filters = HashMap::new();
        match course_filter {
            None => tracing::debug!("No course filter applied"),
            Some(course) => {
                tracing::debug!("Applying course filter: {}", course);
                filters.insert("course".to_string(), course.to_string());
            }
        }

        let mut boosts = HashMap::new();
        boosts.insert("question".to_string(), QUESTION_BOOST);
        boosts.insert("section".to_string(), SECTION_BOOST);

        self.index.search(query, &filters, &boosts, NUM_RESULTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(question: &str, text: &str, course: &str) -> Document {
        Document {
            question: question.to_string(),
            text: text.to_string(),
            section: "General".to_string(),
            course: course.to_string(),
        }
    }

    fn sample_retriever() -> Retriever {
        Retriever::build(
            RetrieverKind::Minisearch,
            vec![
                doc(
                    "Can I still join after it started?",
                    "Yes, you can still submit homework.",
                    "data-engineering-zoomcamp",
                ),
                doc(
                    "Where are the recordings?",
                    "Recordings are linked from the course page.",
                    "data-engineering-zoomcamp",
                ),
                doc(
                    "Can I still join after it started?",
                    "Yes, registration stays open.",
                    "machine-learning-zoomcamp",
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_parse_known_retriever() {
        assert_eq!(
            RetrieverKind::parse("minisearch").unwrap(),
            RetrieverKind::Minisearch
        );
        assert_eq!(RetrieverKind::Minisearch.as_str(), "minisearch");
    }

    #[test]
    fn test_parse_unknown_retriever() {
        let err = RetrieverKind::parse("elasticsearch").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("elasticsearch"));
    }

    #[test]
    fn test_retrieve_without_filter_searches_all_courses() {
        let retriever = sample_retriever();
        let results = retriever.retrieve("Can I still join?", None);

        assert_eq!(results.len(), 2);
        let courses: Vec<&str> = results.iter().map(|d| d.course.as_str()).collect();
        assert!(courses.contains(&"data-engineering-zoomcamp"));
        assert!(courses.contains(&"machine-learning-zoomcamp"));
    }

    #[test]
    fn test_retrieve_with_filter_restricts_course() {
        let retriever = sample_retriever();
        let results = retriever.retrieve("Can I still join?", Some("machine-learning-zoomcamp"));

        assert!(!results.is_empty());
        for result in &results {
            assert_eq!(result.course, "machine-learning-zoomcamp");
        }
    }

    #[test]
    fn test_retrieve_with_unmatched_filter_is_empty() {
        let retriever = sample_retriever();
        let results = retriever.retrieve("Can I still join?", Some("mlops-zoomcamp"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_collection_fails_at_build() {
        let err = Retriever::build(RetrieverKind::Minisearch, vec![]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
