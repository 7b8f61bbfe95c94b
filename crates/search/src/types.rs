//! FAQ document model and wire types.

use serde::{Deserialize, Serialize};

/// One FAQ entry, stamped with the course it belongs to.
///
/// Documents are immutable once loaded; identity is positional within the
/// source collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The FAQ question
    pub question: String,

    /// The FAQ answer body
    pub text: String,

    /// Section of the FAQ the entry lives in
    pub section: String,

    /// Course identifier (categorical, used for filtering)
    pub course: String,
}

impl Document {
    /// Look up a field by name.
    ///
    /// Covers the text fields (`question`, `text`, `section`) and the
    /// keyword field (`course`).
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "question" => Some(&self.question),
            "text" => Some(&self.text),
            "section" => Some(&self.section),
            "course" => Some(&self.course),
            _ => None,
        }
    }
}

/// A document as it appears in the source payload, before the course is
/// stamped on.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub question: String,
    pub text: String,
    pub section: String,
}

/// One course's worth of documents in the source payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseGroup {
    pub course: String,
    pub documents: Vec<RawDocument>,
}

/// Flatten course groups into one document sequence, stamping each entry
/// with its course. Source order is preserved; the index relies on it for
/// tie-breaking.
pub fn flatten_groups(groups: Vec<CourseGroup>) -> Vec<Document> {
    let mut documents = Vec::new();
    for group in groups {
        for raw in group.documents {
            documents.push(Document {
                question: raw.question,
                text: raw.text,
                section: raw.section,
                course: group.course.clone(),
            });
        }
    }
    documents
}
