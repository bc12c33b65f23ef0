use crate::error::{Result, WebpagePackError};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Fixed timeout for a single reader request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Unconditional pause after every fetch attempt, successful or not, to
/// respect the reader service's rate limits. Not a backoff; there are no
/// retries.
pub const FETCH_PAUSE: Duration = Duration::from_secs(1);

/// Default reader service endpoint (Jina Reader).
pub const DEFAULT_READER_URL: &str = "https://r.jina.ai";

/// HTTP client for the remote reader service.
///
/// The reader converts a live page into a text response laid out as
/// `Title:` / `URL Source:` / `Markdown Content:` blocks; this type only
/// moves bytes, extraction lives in [`crate::services::extractor`].
pub struct ReaderFetcher {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ReaderFetcher {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page through the reader and return the raw response text.
    ///
    /// The target URL is appended to the reader base verbatim; the reader
    /// expects the nested URL unencoded. Any transport failure or non-2xx
    /// status is an error for this URL only, the batch decides what to do
    /// with it.
    pub async fn read_url(&self, url: &str) -> Result<String> {
        let endpoint = format!("{}/{}", self.base_url, url);
        debug!("GET {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WebpagePackError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
