//! Wire types for the upstream "everything" news-search endpoint
//!
//! Deserialization is deliberately lenient: the upstream omits or nulls
//! fields freely, and a missing field must never fail the whole response.

use serde::Deserialize;

/// Upstream response for an `everything` search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverythingResponse {
    /// "ok" or "error"
    #[serde(default)]
    pub status: String,
    /// Upstream's reported total, which counts entries we may drop
    #[serde(default)]
    pub total_results: Option<u32>,
    /// Raw article list
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// A single raw article as delivered by the upstream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: RawSource,
    pub author: Option<String>,
    /// May be missing, empty, or the redaction sentinel
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: String,
}

/// Raw source block of an upstream article
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}
