//! Async client for the public REST Countries v3.1 API.
//!
//! Two operations are consumed:
//! - `GET {base}/v3.1/all`         — the full record collection
//! - `GET {base}/v3.1/name/{text}` — records whose name matches `{text}`
//!
//! REST Countries signals "nothing matched" with a 404 body rather than an
//! empty list; that case maps to [`CountryDataError::NotFound`] so callers
//! can treat it as a lookup miss instead of a transport problem.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::{
    error::{CountryDataError, Result},
    explorer::CountrySource,
    model::CountryRecord,
};

/// Public endpoint used when callers have no reason to override it.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Thin client for REST Countries. Reuses one HTTP client with a
/// configurable timeout across calls.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    base: String,
}

impl RestCountriesClient {
    /// Creates a client for the given API base URL.
    ///
    /// # Errors
    /// - [`CountryDataError::InvalidEndpoint`] if `base_url` is empty or
    ///   not http(s)
    /// - [`CountryDataError::Transport`] if the HTTP client cannot be built
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let base = base_url.trim();
        if base.is_empty() || !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CountryDataError::InvalidEndpoint(base_url.to_string()));
        }

        let timeout = timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the full unfiltered collection.
    #[instrument(skip_all)]
    pub async fn fetch_all(&self) -> Result<Vec<CountryRecord>> {
        self.fetch(format!("{}/v3.1/all", self.base)).await
    }

    /// Fetches records whose name matches `text` (the upstream match is
    /// fuzzy-ish; exactness is the provider's business).
    #[instrument(skip_all, fields(name = %text))]
    pub async fn fetch_by_name(&self, text: &str) -> Result<Vec<CountryRecord>> {
        self.fetch(format!("{}/v3.1/name/{}", self.base, text)).await
    }

    async fn fetch(&self, url: String) -> Result<Vec<CountryRecord>> {
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CountryDataError::NotFound { url });
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(CountryDataError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        resp.json()
            .await
            .map_err(|e| CountryDataError::Decode(format!("serde error: {e}")))
    }
}

impl CountrySource for RestCountriesClient {
    fn all(&self) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send {
        self.fetch_all()
    }

    fn by_name(&self, text: &str) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send {
        self.fetch_by_name(text)
    }
}
