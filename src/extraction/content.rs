//! Visible text extraction
//!
//! Walks every text node of the document and turns it into joined tokens,
//! skipping nodes whose immediate parent is a `script`, `style` or `time`
//! element.

use tracing::{debug, instrument};

use crate::document::HtmlDocument;
use crate::tokenizer::{fragment_to_joined, JOIN};

/// Parent elements whose text is never visible content
pub const EXCLUDED_PARENTS: [&str; 3] = ["script", "style", "time"];

/// Visible text extraction functionality
pub struct ContentExtractor;

impl ContentExtractor {
    /// Extract the visible text as comma-joined tokens, in document order
    ///
    /// Returns `None` when there is no document. Text entities are decoded
    /// by the parser, so no second decode happens here.
    #[instrument(skip_all)]
    pub fn visible_text(doc: Option<&HtmlDocument>) -> Option<String> {
        let doc = doc?;
        let mut out = String::new();
        let mut nodes = 0usize;

        for node in doc.text_nodes() {
            if node.text.is_empty() || Self::is_excluded(node.parent) {
                continue;
            }
            // separate nodes so tokens never merge across elements
            if !out.is_empty() {
                out.push_str(JOIN);
            }
            out.push_str(&fragment_to_joined(node.text));
            nodes += 1;
        }

        debug!("Extracted visible text from {} nodes", nodes);
        Some(out)
    }

    fn is_excluded(parent: Option<&str>) -> bool {
        parent.is_some_and(|name| EXCLUDED_PARENTS.contains(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::split_joined;
    use pretty_assertions::assert_eq;

    fn tokens(html: &str) -> Vec<String> {
        let doc = HtmlDocument::parse(html);
        let text = ContentExtractor::visible_text(Some(&doc)).unwrap();
        split_joined(&text).map(String::from).collect()
    }

    #[test]
    fn test_no_document() {
        assert!(ContentExtractor::visible_text(None).is_none());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            tokens("the cat sat on the mat"),
            vec!["THE", "CAT", "SAT", "ON", "THE", "MAT"]
        );
    }

    #[test]
    fn test_skips_script_style_time() {
        let html = r#"<html><head><style>body { color: red }</style>
            <script>var hidden = 1;</script></head>
            <body><p>Visible words</p><time>Monday</time></body></html>"#;
        assert_eq!(tokens(html), vec!["VISIBLE", "WORDS"]);
    }

    #[test]
    fn test_only_immediate_parent_is_checked() {
        assert_eq!(tokens("<time><b>Nested</b></time>"), vec!["NESTED"]);
    }

    #[test]
    fn test_noscript_markup_is_not_counted() {
        assert_eq!(
            tokens("<body><noscript><p>Enable JS please</p></noscript><p>ok</p></body>"),
            vec!["ENABLE", "JS", "PLEASE", "OK"]
        );
    }

    #[test]
    fn test_adjacent_nodes_do_not_merge() {
        assert_eq!(tokens("<p>Hello</p><p>World</p>"), vec!["HELLO", "WORLD"]);
    }

    #[test]
    fn test_punctuation_and_entities() {
        assert_eq!(
            tokens("<p>Rock &amp; roll -- isn&#39;t it... great?</p>"),
            vec!["ROCK", "ROLL", "ISN'T", "IT", "GREAT"]
        );
    }

    #[test]
    fn test_empty_body() {
        let doc = HtmlDocument::parse("<html><body></body></html>");
        assert_eq!(ContentExtractor::visible_text(Some(&doc)), Some(String::new()));
    }
}
