//! In-memory keyword search index.
//!
//! The index is built once over the full document collection and is
//! read-only afterwards; queries take `&self` and the structure is
//! `Send + Sync`, so concurrent reads are safe if the caller ever needs
//! them.

use crate::types::Document;
use faqbot_core::{AppError, AppResult};
use std::collections::HashMap;

/// Capability interface of the search index.
///
/// `search` returns up to `limit` documents ranked by relevance score
/// descending. A document is excluded entirely if it fails any `filters`
/// entry (keyword-field equality, not substring). Each text field's score
/// contribution is multiplied by its boost weight (default 1.0).
///
/// Conformance requirement for any implementation: an exact term match on
/// a boosted field must rank at least as high as the same match on an
/// unboosted field, all else equal.
pub trait SearchIndex: Send + Sync {
    fn search(
        &self,
        query: &str,
        filters: &HashMap<String, String>,
        boosts: &HashMap<String, f32>,
        limit: usize,
    ) -> Vec<Document>;
}

/// English stop words removed during tokenization.
const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "as", "are", "was", "were", "for", "to", "of",
    "in", "and", "or", "but", "with", "by", "from", "this", "that", "be", "have", "has", "had",
    "it", "its", "their", "they", "them", "you", "your", "can", "do", "does", "how", "what",
    "when", "where", "will", "i", "we", "my", "our",
];

/// Split text into lowercase alphanumeric terms of length >= 2, with stop
/// words removed.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Postings for one term within one field.
#[derive(Debug)]
struct Postings {
    /// Smoothed inverse document frequency of the term
    idf: f32,
    /// (document position, tf-idf weight) pairs, in document order
    docs: Vec<(usize, f32)>,
}

/// TF-IDF vectors for one text field across all documents.
#[derive(Debug)]
struct FieldIndex {
    name: String,
    postings: HashMap<String, Postings>,
    /// l2 norm of each document's tf-idf vector (0.0 for empty fields)
    norms: Vec<f32>,
}

impl FieldIndex {
    /// Build the inverted index for one field.
    fn build(name: &str, documents: &[Document]) -> Self {
        let n = documents.len();

        // Term frequencies per document
        let doc_terms: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = HashMap::new();
                for term in tokenize(doc.field(name).unwrap_or_default()) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Document frequency per term
        let mut df: HashMap<&str, usize> = HashMap::new();
        for terms in &doc_terms {
            for term in terms.keys() {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        // Smoothed idf, sklearn-style: ln((1 + n) / (1 + df)) + 1
        let idf_of =
            |df: usize| -> f32 { ((1.0 + n as f32) / (1.0 + df as f32)).ln() + 1.0 };

        let mut postings: HashMap<String, Postings> = HashMap::new();
        let mut norms = vec![0.0f32; n];

        for (doc_id, terms) in doc_terms.iter().enumerate() {
            let mut norm_sq = 0.0f32;
            for (term, &tf) in terms {
                let idf = idf_of(df[term.as_str()]);
                let weight = tf as f32 * idf;
                norm_sq += weight * weight;

                postings
                    .entry(term.clone())
                    .or_insert_with(|| Postings {
                        idf,
                        docs: Vec::new(),
                    })
                    .docs
                    .push((doc_id, weight));
            }
            norms[doc_id] = norm_sq.sqrt();
        }

        Self {
            name: name.to_string(),
            postings,
            norms,
        }
    }

    /// Cosine similarity between the query and every document, for this
    /// field. Returns a dense score vector; documents without any matching
    /// term score 0.0.
    fn score(&self, query_terms: &HashMap<String, usize>) -> Vec<f32> {
        let mut dots = vec![0.0f32; self.norms.len()];

        let mut query_norm_sq = 0.0f32;
        for (term, &tf) in query_terms {
            if let Some(postings) = self.postings.get(term) {
                let query_weight = tf as f32 * postings.idf;
                query_norm_sq += query_weight * query_weight;

                for &(doc_id, doc_weight) in &postings.docs {
                    dots[doc_id] += query_weight * doc_weight;
                }
            }
        }

        if query_norm_sq == 0.0 {
            return dots;
        }
        let query_norm = query_norm_sq.sqrt();

        for (doc_id, dot) in dots.iter_mut().enumerate() {
            let doc_norm = self.norms[doc_id];
            if doc_norm > 0.0 {
                *dot /= query_norm * doc_norm;
            }
        }

        dots
    }
}

/// Keyword search index over the FAQ collection.
///
/// Per text field, documents and queries are represented as l2-normalized
/// TF-IDF vectors; a document's relevance is the boost-weighted sum of its
/// per-field cosine similarities. Keyword fields support equality filters
/// only.
#[derive(Debug)]
pub struct MiniSearchIndex {
    documents: Vec<Document>,
    fields: Vec<FieldIndex>,
    keyword_fields: Vec<String>,
}

impl MiniSearchIndex {
    /// Build the index over the full document collection.
    ///
    /// Fails with a configuration error when the collection or either
    /// field list is empty; an index that can never return anything is a
    /// misconfiguration, not a valid state.
    pub fn fit(
        documents: Vec<Document>,
        text_fields: &[&str],
        keyword_fields: &[&str],
    ) -> AppResult<Self> {
        if documents.is_empty() {
            return Err(AppError::Config(
                "Cannot build index over an empty document collection".to_string(),
            ));
        }
        if text_fields.is_empty() || keyword_fields.is_empty() {
            return Err(AppError::Config(
                "Index requires at least one text field and one keyword field".to_string(),
            ));
        }

        let fields = text_fields
            .iter()
            .map(|name| FieldIndex::build(name, &documents))
            .collect();

        tracing::debug!(
            "Built index: {} documents, text fields {:?}, keyword fields {:?}",
            documents.len(),
            text_fields,
            keyword_fields
        );

        Ok(Self {
            documents,
            fields,
            keyword_fields: keyword_fields.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Check a document against every filter entry (keyword equality).
    ///
    /// Filters naming a non-keyword field never match; the filter
    /// vocabulary is fixed at build time.
    fn passes_filters(&self, doc: &Document, filters: &HashMap<String, String>) -> bool {
        filters.iter().all(|(field, value)| {
            self.keyword_fields.iter().any(|k| k == field)
                && doc.field(field) == Some(value.as_str())
        })
    }
}

impl SearchIndex for MiniSearchIndex {
    fn search(
        &self,
        query: &str,
        filters: &HashMap<String, String>,
        boosts: &HashMap<String, f32>,
        limit: usize,
    ) -> Vec<Document> {
        let mut query_terms: HashMap<String, usize> = HashMap::new();
        for term in tokenize(query) {
            *query_terms.entry(term).or_insert(0) += 1;
        }

        let mut scores = vec![0.0f32; self.documents.len()];
        for field in &self.fields {
            let boost = boosts.get(&field.name).copied().unwrap_or(1.0);
            for (doc_id, score) in field.score(&query_terms).into_iter().enumerate() {
                scores[doc_id] += boost * score;
            }
        }

        // Positive scores only, filtered, in document order so that the
        // stable sort breaks ties by index order
        let mut ranked: Vec<(usize, f32)> = scores
            .into_iter()
            .enumerate()
            .filter(|&(doc_id, score)| {
                score > 0.0 && self.passes_filters(&self.documents[doc_id], filters)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|(doc_id, _)| self.documents[doc_id].clone())
            .collect()
    }
}
