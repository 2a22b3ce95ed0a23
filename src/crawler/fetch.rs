// src/crawler/fetch.rs
// =============================================================================
// The fetcher performs a single HTTP GET with a client-level timeout (separate
// from, and nested inside, the job-level timeout), reads the full body and
// hands it to the link extractor.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::extract;

pub(crate) struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Builds a fetcher whose HTTP client times out on its own; the default
    // reqwest client has no timeout and could hang a worker forever.
    pub(crate) fn new(http_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(http_timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    // Fetches `url` and returns the resolved, same-host links found on the
    // page. Exactly one outbound request per call; the response status is not
    // inspected, whatever body comes back is parsed.
    pub(crate) async fn fetch_links(&self, url: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        let body = response
            .text()
            .await
            .with_context(|| format!("reading body of {url}"))?;

        let links = extract::anchor_hrefs(&body);
        let base = extract::base_href(&body);
        extract::resolve_links(url, base.as_deref(), links)
            .with_context(|| format!("resolving links found on {url}"))
    }
}
