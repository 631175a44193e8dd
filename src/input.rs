//! Input resolution
//!
//! An input string is either literal text or an absolute http(s) URL. URLs
//! are fetched once with a blocking GET; everything else is used verbatim
//! and never touches the network.

use tracing::{info, instrument, warn};
use url::Url;

use crate::config::AnalyzerConfig;
use crate::error::{Error, FetchError, Result};

/// Whether `input` is an absolute URL with scheme `http` or `https`
pub fn is_web_url(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    Url::parse(input)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Source of remote page bodies
pub trait Fetcher {
    /// Fetch the raw body at `url`
    fn fetch(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP fetcher backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with platform defaults, honouring the optional
    /// timeout and User-Agent from `config`
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %url))]
    fn fetch(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
        info!("Fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())?;

        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}

/// Text produced by resolving an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedInput {
    /// The input was literal text
    Text(String),
    /// The input was a URL whose body was fetched
    Fetched {
        /// URL that was fetched
        url: Url,
        /// Decoded body
        text: String,
    },
}

impl ResolvedInput {
    /// The resolved text
    pub fn text(&self) -> &str {
        match self {
            ResolvedInput::Text(text) => text,
            ResolvedInput::Fetched { text, .. } => text,
        }
    }

    /// Whether the network was used
    pub fn was_fetched(&self) -> bool {
        matches!(self, ResolvedInput::Fetched { .. })
    }
}

/// Resolve `input` into text, fetching it when it is a web URL
///
/// # Errors
///
/// `Error::EmptyInput` for an empty string, `Error::Fetch` when the fetch fails.
#[instrument(skip(input, fetcher), fields(len = input.len()))]
pub fn resolve(input: &str, fetcher: &dyn Fetcher) -> Result<ResolvedInput> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    if !is_web_url(input) {
        return Ok(ResolvedInput::Text(input.to_string()));
    }

    let url = Url::parse(input).map_err(|e| FetchError::Request(e.to_string()))?;
    let body = fetcher.fetch(&url).map_err(|e| {
        warn!("Fetch failed: {}", e);
        e
    })?;

    Ok(ResolvedInput::Fetched {
        url,
        text: decode_body(&body),
    })
}

/// Decode a fetched body as UTF-8, replacing invalid sequences
pub fn decode_body(body: &[u8]) -> String {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
    String::from_utf8_lossy(body).into_owned()
}
