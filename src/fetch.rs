// src/fetch.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key decisions:
// - One reqwest::Client built at startup and reused for every request
//   (connection pooling)
// - A 10 second timeout per request, so a stalled remote host can never
//   wedge the whole crawl
// - A small error taxonomy instead of a single opaque error, because the
//   crawl session treats every failure the same way (warn and skip) but
//   the warning should say WHAT failed
//
// Rust concepts:
// - Enums with data: CrawlError variants carry the underlying cause
// - Trait implementations: Display and Error make CrawlError a proper
//   error type usable with ? and anyhow
// =============================================================================

use reqwest::Client;
use std::time::Duration;

// Per-request timeout. The crawl is synchronous from the user's point of
// view, so a slow host directly delays the prompt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// What went wrong while fetching one URL
//
// All three variants are session-local and recoverable by skipping the
// URL; none of them ever aborts the crawl of the remaining seeds.
#[derive(Debug)]
pub enum CrawlError {
    /// Connection-level failure: DNS, refused connection, timeout, TLS
    Transport(reqwest::Error),
    /// The server answered with a non-success status code
    Status(u16),
    /// The response body could not be read or decoded
    Parse(String),
}

impl std::fmt::Display for CrawlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrawlError::Transport(e) => write!(f, "request failed: {}", e),
            CrawlError::Status(code) => write!(f, "HTTP status {}", code),
            CrawlError::Parse(msg) => write!(f, "could not read body: {}", msg),
        }
    }
}

impl std::error::Error for CrawlError {}

impl From<reqwest::Error> for CrawlError {
    fn from(err: reqwest::Error) -> Self {
        CrawlError::Transport(err)
    }
}

// A reusable HTTP fetcher wrapping one configured client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher with our standard client settings
    //
    // Construction can fail (TLS backend initialization), and that is the
    // one fetch-related error that IS fatal: without a client there is
    // nothing to crawl with.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent("Mozilla/5.0 (compatible; newshound/0.1)")
            .build()?;

        Ok(Self { client })
    }

    // Fetches one URL and returns the response body as a string
    //
    // Parameters:
    //   url: the absolute URL to GET
    //
    // Returns: the body on success, or a CrawlError naming the failure.
    //
    // The response is fully consumed (or dropped) on every path before
    // this function returns, so nothing stays open between fetches.
    pub async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CrawlError::Parse(e.to_string()))?;

        Ok(body)
    }
}
