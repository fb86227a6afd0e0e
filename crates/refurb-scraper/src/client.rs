//! HTTP access to product pages for the enrichment pass.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::html::html_to_text;

/// Produces the richer text of a listing's product page on demand.
///
/// Implementations make a single attempt per call; callers decide what a
/// failure means for the listing.
pub trait SecondaryTextSource {
    fn secondary_text(
        &self,
        product_url: &str,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches product pages over HTTP and flattens them into visible text.
///
/// Non-2xx responses are typed errors. There is no retry: a failed page
/// costs one request and the listing keeps its tile data.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads `url` and returns the raw HTML body.
    ///
    /// # Errors
    ///
    /// - [`FetchError::NotFound`]: HTTP 404.
    /// - [`FetchError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`FetchError::EmptyBody`]: 2xx with a blank body.
    /// - [`FetchError::Http`]: network, timeout, or body decoding failure.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_owned(),
            });
        }
        Ok(body)
    }

    /// Downloads `url` and returns its visible text.
    ///
    /// # Errors
    ///
    /// Same as [`PageClient::fetch_html`].
    pub async fn fetch_page_text(&self, url: &str) -> Result<String, FetchError> {
        let html = self.fetch_html(url).await?;
        Ok(html_to_text(&html))
    }
}

impl SecondaryTextSource for PageClient {
    fn secondary_text(
        &self,
        product_url: &str,
    ) -> impl Future<Output = Result<String, FetchError>> + Send {
        self.fetch_page_text(product_url)
    }
}
