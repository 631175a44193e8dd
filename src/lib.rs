//! SEO Analyzer - word-frequency statistics for text and web pages
//!
//! Accepts raw text or an http(s) URL, parses it as HTML and computes:
//!
//! - **Words**: frequency of every visible word that is not a stop word
//! - **Stop words**: frequency of visible stop words
//! - **Words in meta tags**: frequency of words in `<meta name=… content=…>`
//! - **External links**: absolute http(s) `href`s of anchor elements
//!
//! # Architecture
//!
//! ```text
//! Caller ──▶ Analyzer ──▶ Input resolver ──▶ (Fetcher, for URLs)
//!                │
//!                ▼
//!          HtmlDocument ──▶ Extraction ──▶ Tokenizer ──▶ FrequencyTable
//!                           (text, meta, links)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use seo_analyzer::{AnalysisOptions, Analyzer, AnalyzerConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = Analyzer::new(AnalyzerConfig::from_env()?)?;
//!     let report = analyzer.analyze("https://example.com", &AnalysisOptions::all());
//!
//!     if let Some(words) = &report.words {
//!         for entry in words.top(10) {
//!             println!("{} {}", entry.word, entry.count);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analyzer;
pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod frequency;
pub mod input;
pub mod stopwords;
pub mod tokenizer;

// Re-exports for convenience
pub use analyzer::{Analysis, AnalysisOptions, AnalysisReport, Analyzer};
pub use config::{AnalyzerConfig, StopWordSource};
pub use document::HtmlDocument;
pub use error::{Error, FetchError, Result};
pub use extraction::{ContentExtractor, LinkExtractor, MetadataExtractor};
pub use frequency::{count_occurrences, FrequencyTable, WordCount};
pub use input::{is_web_url, Fetcher, HttpFetcher, ResolvedInput};
pub use stopwords::StopWordSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
