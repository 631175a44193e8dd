//! Meta tag text extraction
//!
//! Tokenizes the `content` attribute of every `<meta>` element that carries
//! both a `name` and a `content` attribute.

use std::sync::LazyLock;

use scraper::Selector;
use tracing::{debug, instrument};

use crate::document::HtmlDocument;
use crate::tokenizer::{tokenize_fragment, JOIN};

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("meta selector is valid"));

const NAME_ATTRIBUTE: &str = "name";
const CONTENT_ATTRIBUTE: &str = "content";

/// Meta tag extraction functionality
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract the meta tag text as comma-joined tokens
    ///
    /// Returns `None` without a document and `Some("")` when the document has
    /// no qualifying `<meta>` elements. Every token is followed by a space.
    #[instrument(skip_all)]
    pub fn meta_text(doc: Option<&HtmlDocument>) -> Option<String> {
        let doc = doc?;
        let mut out = String::new();
        let mut tags = 0usize;

        for meta in doc.select(&META_SELECTOR) {
            let (Some(_), Some(content)) = (meta.attr(NAME_ATTRIBUTE), meta.attr(CONTENT_ATTRIBUTE))
            else {
                continue;
            };

            let tokens: Vec<String> = tokenize_fragment(content)
                .into_iter()
                .map(|token| token + " ")
                .collect();
            out.push_str(&tokens.join(JOIN));
            tags += 1;
        }

        debug!("Extracted text from {} meta tags", tags);
        Some(out)
    }
}
