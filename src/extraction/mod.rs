//! Extraction from a parsed document
//!
//! Each extractor is a read-only traversal of an [`HtmlDocument`](crate::document::HtmlDocument)
//! and returns `None` when there is no document to read ("no data").

pub mod content;
pub mod links;
pub mod metadata;

pub use content::ContentExtractor;
pub use links::LinkExtractor;
pub use metadata::MetadataExtractor;
