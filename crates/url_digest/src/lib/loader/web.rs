use url::Url;

use crate::{
    error::Error,
    loader::{Document, DocumentLoader},
    parser,
};

/// Generic web-page retrieval strategy: fetches a page with a fixed
/// desktop-browser User-Agent, TLS certificate verification disabled, and
/// reduces the body to plain text.
pub struct WebPageLoader {
    client: reqwest::Client,
}

impl WebPageLoader {
    const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(Self::USER_AGENT)
            .build()?;

        Ok(WebPageLoader { client })
    }
}

impl DocumentLoader for WebPageLoader {
    type Error = Error;

    async fn load(&self, url: &Url) -> Result<Vec<Document>, Self::Error> {
        let html = self
            .client
            .get(url.clone())
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch page"))?
            .error_for_status()?
            .text()
            .await?;

        let text = parser::html_to_text(&html);
        if text.is_empty() {
            tracing::warn!(%url, "No textual content extracted from page");
            return Ok(Vec::new());
        }

        Ok(vec![Document::new(text, url.as_str())])
    }
}
