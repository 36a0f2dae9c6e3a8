//! Pure transform from the raw upstream response to the served feed

use cybered_core::{Article, ArticleSource, NewsResponse};

use crate::fallback::fallback_image;
use crate::types::{EverythingResponse, RawArticle};

/// Title the upstream substitutes for redacted/unavailable articles
pub const REMOVED_TITLE: &str = "[Removed]";

/// Filter and normalize an upstream response.
///
/// Articles without a usable title are dropped; everything else passes
/// through in upstream order. `total_results` is recomputed from the
/// filtered list rather than copied from the upstream, whose total counts
/// entries we drop.
pub fn normalize(response: EverythingResponse) -> NewsResponse {
    let articles: Vec<Article> = response
        .articles
        .into_iter()
        .filter_map(normalize_article)
        .collect();
    let total_results = articles.len();

    NewsResponse {
        articles,
        total_results,
    }
}

/// Normalize a single raw article, or drop it.
///
/// Keeps the article only if its title is present, non-empty, and not the
/// redaction sentinel. A missing or empty image URL is replaced with a
/// deterministic local placeholder; a present one is never overwritten.
fn normalize_article(raw: RawArticle) -> Option<Article> {
    let title = raw
        .title
        .filter(|t| !t.is_empty() && t.as_str() != REMOVED_TITLE)?;

    let url_to_image = match raw.url_to_image {
        Some(image) if !image.is_empty() => image,
        _ => fallback_image(&title).to_string(),
    };

    Some(Article {
        source: ArticleSource {
            id: raw.source.id,
            name: raw.source.name.unwrap_or_default(),
        },
        author: raw.author,
        title,
        description: raw.description,
        url: raw.url,
        url_to_image,
        published_at: raw.published_at,
    })
}
