//! Normalized news data structures served to the front end
//!
//! Field names follow the upstream wire convention (camelCase) so the
//! front end can consume responses without any renaming layer.

use serde::{Deserialize, Serialize};

/// Source of a news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Upstream source identifier, when the upstream assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the news source (e.g., "Reuters", "BleepingComputer")
    pub name: String,
}

/// A normalized news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Source information
    pub source: ArticleSource,
    /// Article author, when reported by the upstream
    pub author: Option<String>,
    /// Article title (guaranteed non-empty after normalization)
    pub title: String,
    /// Brief summary/excerpt
    pub description: Option<String>,
    /// Link to the article
    pub url: String,
    /// Thumbnail URL; a local fallback path when the upstream had none
    pub url_to_image: String,
    /// Publication timestamp, passed through verbatim as ISO-8601 text
    pub published_at: String,
}

/// News feed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// Filtered, normalized articles in upstream order
    pub articles: Vec<Article>,
    /// Count of `articles` after filtering, not the upstream's reported
    /// total (which may include entries we drop)
    pub total_results: usize,
}
