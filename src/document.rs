//! Parsed HTML document
//!
//! A thin, read-only view over a `scraper` tree exposing only what the
//! extractors need: text nodes with their parent element, element selection
//! and attribute lookup. The tree is never mutated after parsing.

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, HtmlTreeSink, Node, Selector};
use tracing::debug;

/// An HTML node tree built from resolved input text
pub struct HtmlDocument {
    html: Html,
}

/// A text leaf in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNode<'a> {
    /// Text content, entities already decoded by the parser
    pub text: &'a str,
    /// Name of the immediate parent element, if the parent is an element
    pub parent: Option<&'a str>,
}

/// Read-only view of a single element
#[derive(Debug, Clone, Copy)]
pub struct ElementView<'a> {
    element: ElementRef<'a>,
}

impl HtmlDocument {
    /// Parse `text` as a full HTML document
    ///
    /// Plain text without markup parses into a document whose body holds a
    /// single text node. Scripting is disabled so that `<noscript>` children
    /// are parsed as elements rather than one raw text node.
    pub fn parse(text: &str) -> Self {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let html = driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(text);
        if !html.errors.is_empty() {
            debug!("HTML parsed with {} recoverable errors", html.errors.len());
        }
        Self { html }
    }

    /// All text nodes in document order
    pub fn text_nodes(&self) -> impl Iterator<Item = TextNode<'_>> {
        self.html.tree.root().descendants().filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let parent = node
                .parent()
                .and_then(|p| p.value().as_element())
                .map(|el| el.name());
            Some(TextNode {
                text: &**text,
                parent,
            })
        })
    }

    /// Elements matching `selector`, in document order
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementView<'a>> {
        self.html
            .select(selector)
            .map(|element| ElementView { element })
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("nodes", &self.html.tree.nodes().count())
            .finish()
    }
}

impl<'a> ElementView<'a> {
    /// Lowercase tag name
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    /// Attribute value, if present
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Whether the attribute is present (even if empty)
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Concatenated text of all descendants
    pub fn inner_text(&self) -> String {
        self.element.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_nodes_carry_parent() {
        let doc = HtmlDocument::parse("<p>one</p><script>two()</script><em>three</em>");
        let nodes: Vec<_> = doc.text_nodes().collect();
        assert_eq!(
            nodes,
            vec![
                TextNode {
                    text: "one",
                    parent: Some("p")
                },
                TextNode {
                    text: "two()",
                    parent: Some("script")
                },
                TextNode {
                    text: "three",
                    parent: Some("em")
                },
            ]
        );
    }

    #[test]
    fn test_plain_text_becomes_body_text() {
        let doc = HtmlDocument::parse("just words");
        let nodes: Vec<_> = doc.text_nodes().collect();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text, "just words");
        assert_eq!(nodes[0].parent, Some("body"));
    }

    #[test]
    fn test_noscript_children_are_elements() {
        let doc = HtmlDocument::parse("<body><noscript><p>Enable JS</p></noscript></body>");
        let nodes: Vec<_> = doc.text_nodes().collect();
        assert_eq!(
            nodes,
            vec![TextNode {
                text: "Enable JS",
                parent: Some("p")
            }]
        );
    }

    #[test]
    fn test_entities_are_decoded() {
        let doc = HtmlDocument::parse("<p>fish &amp; chips</p>");
        let text: Vec<_> = doc.text_nodes().map(|n| n.text).collect();
        assert_eq!(text, vec!["fish & chips"]);
    }

    #[test]
    fn test_select_and_attributes() {
        let doc = HtmlDocument::parse(r#"<a href="/x" title="X">link <b>text</b></a><a>none</a>"#);
        let selector = Selector::parse("a").unwrap();
        let anchors: Vec<_> = doc.select(&selector).collect();
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].name(), "a");
        assert_eq!(anchors[0].attr("href"), Some("/x"));
        assert!(anchors[0].has_attr("title"));
        assert_eq!(anchors[0].inner_text(), "link text");
        assert!(!anchors[1].has_attr("href"));
    }
}
