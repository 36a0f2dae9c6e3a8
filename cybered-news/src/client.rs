//! Client for the upstream "everything" news-search endpoint

use reqwest::Client;
use tracing::{info, instrument};

use cybered_core::NewsResponse;

use crate::error::NewsError;
use crate::normalize::normalize;
use crate::types::EverythingResponse;

const NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2";

/// Fixed search query covering the site's cybersecurity beat.
/// Terms are OR-ed; multi-word phrases are quoted so the upstream matches
/// them exactly.
const SEARCH_QUERY: &str = "cybersecurity OR \"cyber security\" OR hacking OR ransomware \
                            OR phishing OR malware OR \"data breach\"";

/// Number of articles requested per fetch
const PAGE_SIZE: u32 = 12;

/// Client for the upstream news-search API
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a client against the production upstream
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, NEWSAPI_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .user_agent("Mozilla/5.0 (compatible; CyberEdSite/1.0)")
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url,
        }
    }

    /// Fetch the latest cybersecurity news, filtered and normalized.
    ///
    /// Issues exactly one GET to the upstream; any failure (network,
    /// non-success status, unparseable body) is terminal for this call.
    #[instrument(skip(self))]
    pub async fn fetch_news(&self) -> Result<NewsResponse, NewsError> {
        let page_size = PAGE_SIZE.to_string();

        let response = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("q", SEARCH_QUERY),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: EverythingResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        info!(
            "Upstream returned {} articles (reported total {:?}, status '{}')",
            body.articles.len(),
            body.total_results,
            body.status
        );

        let feed = normalize(body);

        info!("Serving {} articles after filtering", feed.total_results);

        Ok(feed)
    }
}
