//! External link extraction
//!
//! Collects `href` values of anchor elements that are absolute http(s) URLs.

use std::sync::LazyLock;

use scraper::Selector;
use tracing::{debug, instrument};

use crate::document::HtmlDocument;
use crate::input::is_web_url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

const HREF_ATTRIBUTE: &str = "href";

/// Link extraction functionality
pub struct LinkExtractor;

impl LinkExtractor {
    /// Extract external links in document order
    ///
    /// Returns `None` without a document or when no `<a href>` exists.
    /// Relative links and other schemes are dropped silently, so the result
    /// may be `Some` of an empty list.
    #[instrument(skip_all)]
    pub fn external_links(doc: Option<&HtmlDocument>) -> Option<Vec<String>> {
        let doc = doc?;
        let hrefs: Vec<&str> = doc
            .select(&ANCHOR_SELECTOR)
            .filter_map(|anchor| anchor.attr(HREF_ATTRIBUTE))
            .collect();

        if hrefs.is_empty() {
            return None;
        }

        let links: Vec<String> = hrefs
            .iter()
            .filter(|href| is_web_url(href))
            .map(|href| href.to_string())
            .collect();

        debug!("Kept {} of {} anchor links", links.len(), hrefs.len());
        Some(links)
    }
}
