//! Search tool: DuckDuckGo HTML results as plain text.

use crate::capability::ports::{
    CapabilityHandler, CapabilityInvocationError, CapabilityInvocationResult,
};
use async_trait::async_trait;
use std::time::Duration;

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const TEXT_WIDTH: usize = 100;
const MAX_CHARS: usize = 2000;

/// Reply when a search yields no text.
pub const NO_RESULTS: &str = "No relevant web content found.";

/// Converts a results page to text, truncated to 2000 characters.
///
/// Returns [`NO_RESULTS`] when nothing readable remains.
///
/// # Errors
///
/// Returns [`CapabilityInvocationError::Runtime`] when the page cannot be
/// converted.
pub fn summarise_page(html: &str) -> CapabilityInvocationResult<String> {
    let text = html2text::from_read(html.as_bytes(), TEXT_WIDTH)
        .map_err(CapabilityInvocationError::runtime)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(NO_RESULTS.to_owned());
    }
    Ok(trimmed.chars().take(MAX_CHARS).collect())
}

/// Web search through the DuckDuckGo HTML endpoint.
#[derive(Debug, Clone)]
pub struct SearchTool {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchTool {
    /// Description used for relevance ranking.
    pub const DESCRIPTION: &'static str =
        "Performs a web search using DuckDuckGo and extracts content as text.";

    /// Creates a search tool whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityInvocationError::Runtime`] when the HTTP client
    /// cannot be constructed.
    pub fn new(timeout: Duration) -> CapabilityInvocationResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(CapabilityInvocationError::runtime)?;
        Ok(Self {
            client,
            endpoint: DDG_HTML_URL.to_owned(),
        })
    }
}

#[async_trait]
impl CapabilityHandler for SearchTool {
    async fn invoke(&self, task: &str) -> CapabilityInvocationResult<String> {
        let query = task.trim();
        if query.is_empty() {
            return Err(CapabilityInvocationError::InvalidInput(
                "search query is empty".to_owned(),
            ));
        }

        let html = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!("q={}&b=", urlencoding::encode(query)))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(CapabilityInvocationError::runtime)?
            .text()
            .await
            .map_err(CapabilityInvocationError::runtime)?;

        tracing::info!(query, "search completed");
        summarise_page(&html)
    }
}
