//! FAQ document source.
//!
//! The source is an HTTP endpoint serving the full document collection as
//! JSON, grouped by course. It is fetched once, at construction time.

use crate::types::{flatten_groups, CourseGroup, Document};
use faqbot_core::{AppError, AppResult};

/// Fetch and flatten the document collection.
///
/// A network or parse failure fails the whole construction; there is no
/// retry and no partial result.
pub async fn fetch_documents(url: &str) -> AppResult<Vec<Document>> {
    tracing::info!("Getting documents from {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::DocumentLoad(format!("Failed to fetch documents: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::DocumentLoad(format!(
            "Document source returned {}",
            response.status()
        )));
    }

    let groups: Vec<CourseGroup> = response
        .json()
        .await
        .map_err(|e| AppError::DocumentLoad(format!("Failed to parse documents: {}", e)))?;

    let course_count = groups.len();
    let documents = flatten_groups(groups);

    tracing::info!(
        "Loaded {} documents across {} courses",
        documents.len(),
        course_count
    );

    Ok(documents)
}
