//! Text analyzer
//!
//! The single entry point of the crate: resolve an input, parse it once and
//! compute only the result collections the caller asked for.
//!
//! ```text
//! input ──▶ resolve (text | fetch) ──▶ HtmlDocument ─┬─▶ visible text ──▶ words / stop words
//!                                                    ├─▶ meta content ──▶ words in tags
//!                                                    └─▶ anchor hrefs ──▶ external links
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::AnalyzerConfig;
use crate::document::HtmlDocument;
use crate::error::Result;
use crate::extraction::{ContentExtractor, LinkExtractor, MetadataExtractor};
use crate::frequency::{count_occurrences, FrequencyTable};
use crate::input::{resolve, Fetcher, HttpFetcher, ResolvedInput};
use crate::stopwords::StopWordSet;

/// Which result collections to compute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Count stop-word occurrences
    pub stop_words: bool,
    /// Count non-stop-word occurrences
    pub words: bool,
    /// Count words found in meta tags
    pub words_in_tags: bool,
    /// Collect external links
    pub external_links: bool,
}

impl AnalysisOptions {
    /// Every collection selected
    pub fn all() -> Self {
        Self {
            stop_words: true,
            words: true,
            words_in_tags: true,
            external_links: true,
        }
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        !(self.stop_words || self.words || self.words_in_tags || self.external_links)
    }
}

/// Outcome of one analysis
///
/// When `error` is set every collection is `None`. Otherwise a collection is
/// `Some` only if it was selected and there was data to compute it from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The caller's input, echoed back
    pub input: String,
    /// Stop-word occurrences
    pub stop_words: Option<FrequencyTable>,
    /// Occurrences of every other word
    pub words: Option<FrequencyTable>,
    /// Occurrences of words in meta tag content
    pub words_in_tags: Option<FrequencyTable>,
    /// Absolute http(s) links from anchors
    pub external_links: Option<Vec<String>>,
    /// Fatal error message
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Report carrying only an error
    pub fn failed<S: Into<String>>(input: &str, error: S) -> Self {
        Self {
            input: input.to_string(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Whether the analysis failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A resolved, parsed input ready for extraction
///
/// Immutable once built. `document` and `stop_words` are absent when the
/// resolved text was empty.
#[derive(Debug)]
pub struct Analysis {
    resolved: ResolvedInput,
    document: Option<HtmlDocument>,
    stop_words: Option<StopWordSet>,
}

impl Analysis {
    /// The resolved input
    pub fn resolved(&self) -> &ResolvedInput {
        &self.resolved
    }

    /// The parsed document, if any
    pub fn document(&self) -> Option<&HtmlDocument> {
        self.document.as_ref()
    }

    /// The stop-word set, if any
    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref()
    }

    /// Occurrences of visible words that are not stop words
    pub fn word_occurrences(&self) -> Option<FrequencyTable> {
        let stop_words = self.stop_words.as_ref()?;
        let text = ContentExtractor::visible_text(self.document())?;
        count_occurrences(Some(&text), |token| !stop_words.contains(token))
    }

    /// Occurrences of visible words that are stop words
    pub fn stop_word_occurrences(&self) -> Option<FrequencyTable> {
        let stop_words = self.stop_words.as_ref()?;
        let text = ContentExtractor::visible_text(self.document())?;
        count_occurrences(Some(&text), |token| stop_words.contains(token))
    }

    /// Occurrences of words in meta tag content, unfiltered
    pub fn words_in_tags_occurrences(&self) -> Option<FrequencyTable> {
        let text = MetadataExtractor::meta_text(self.document())?;
        count_occurrences(Some(&text), |_| true)
    }

    /// External links in document order
    pub fn external_links(&self) -> Option<Vec<String>> {
        LinkExtractor::external_links(self.document())
    }

    /// Compute the selected collections
    pub fn report(&self, input: &str, options: &AnalysisOptions) -> AnalysisReport {
        AnalysisReport {
            input: input.to_string(),
            stop_words: options
                .stop_words
                .then(|| self.stop_word_occurrences())
                .flatten(),
            words: options.words.then(|| self.word_occurrences()).flatten(),
            words_in_tags: options
                .words_in_tags
                .then(|| self.words_in_tags_occurrences())
                .flatten(),
            external_links: options
                .external_links
                .then(|| self.external_links())
                .flatten(),
            error: None,
        }
    }
}

/// Analyzer for raw text or web pages
pub struct Analyzer {
    config: AnalyzerConfig,
    fetcher: Box<dyn Fetcher>,
}

impl Analyzer {
    /// Create an analyzer that fetches URLs over HTTP
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create an analyzer with a custom fetcher
    pub fn with_fetcher<F: Fetcher + 'static>(config: AnalyzerConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher: Box::new(fetcher),
        }
    }

    /// The analyzer configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Resolve and parse `input`
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput`, `Error::Fetch` or `Error::StopWords`.
    #[instrument(skip(self, input))]
    pub fn prepare(&self, input: &str) -> Result<Analysis> {
        let resolved = resolve(input, self.fetcher.as_ref())?;

        if resolved.text().is_empty() {
            debug!("Resolved text is empty, nothing to parse");
            return Ok(Analysis {
                resolved,
                document: None,
                stop_words: None,
            });
        }

        let document = HtmlDocument::parse(resolved.text());
        let stop_words = StopWordSet::load(&self.config.stop_words)?;

        Ok(Analysis {
            resolved,
            document: Some(document),
            stop_words: Some(stop_words),
        })
    }

    /// Typed analysis: the report on success, the fatal error otherwise
    pub fn try_analyze(&self, input: &str, options: &AnalysisOptions) -> Result<AnalysisReport> {
        let analysis = self.prepare(input)?;
        Ok(analysis.report(input, options))
    }

    /// Analyze `input`, folding any fatal error into the report
    #[instrument(skip(self, input))]
    pub fn analyze(&self, input: &str, options: &AnalysisOptions) -> AnalysisReport {
        match self.try_analyze(input, options) {
            Ok(report) => {
                info!(
                    words = report.words.as_ref().map(|t| t.len()),
                    stop_words = report.stop_words.as_ref().map(|t| t.len()),
                    links = report.external_links.as_ref().map(|l| l.len()),
                    "Analysis complete"
                );
                report
            }
            Err(err) => {
                warn!("Analysis failed: {}", err);
                AnalysisReport::failed(input, err.message())
            }
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopWordSource;
    use crate::error::FetchError;
    use pretty_assertions::assert_eq;
    use url::Url;

    struct NoNetwork;

    impl Fetcher for NoNetwork {
        fn fetch(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
            panic!("unexpected fetch of {}", url);
        }
    }

    fn analyzer(stop_words: &[&str]) -> Analyzer {
        let config = AnalyzerConfig::new().with_stop_words(StopWordSource::Inline(
            stop_words.iter().map(|w| w.to_string()).collect(),
        ));
        Analyzer::with_fetcher(config, NoNetwork)
    }

    #[test]
    fn test_only_selected_collections() {
        let options = AnalysisOptions {
            words: true,
            ..Default::default()
        };
        let report = analyzer(&["the"]).analyze("the cat", &options);
        assert!(report.words.is_some());
        assert!(report.stop_words.is_none());
        assert!(report.words_in_tags.is_none());
        assert!(report.external_links.is_none());
        assert!(report.error.is_none());
    }

    #[test]
    fn test_empty_input_report() {
        let report = analyzer(&[]).analyze("", &AnalysisOptions::all());
        assert_eq!(report, AnalysisReport::failed("", "Input text is empty"));
    }

    #[test]
    fn test_stop_word_split() {
        let analysis = analyzer(&["the", "a"])
            .prepare("the cat sat on the mat")
            .unwrap();

        let stop = analysis.stop_word_occurrences().unwrap();
        assert_eq!(stop.words(), vec!["THE"]);
        assert_eq!(stop.get("THE"), Some(2));

        let words = analysis.word_occurrences().unwrap();
        assert_eq!(words.words(), vec!["CAT", "SAT", "ON", "MAT"]);
        assert!(words.iter().all(|w| w.count == 1));
    }

    #[test]
    fn test_no_selection_computes_nothing() {
        let report = analyzer(&[]).analyze("words", &AnalysisOptions::default());
        assert_eq!(
            report,
            AnalysisReport {
                input: "words".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_options_all() {
        assert!(AnalysisOptions::default().is_empty());
        assert!(!AnalysisOptions::all().is_empty());
    }
}
