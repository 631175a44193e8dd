//! Stop-word list
//!
//! A read-only set of lowercase words used for case-insensitive membership
//! tests. Loaded once per analysis from the configured [`StopWordSource`].

use std::collections::HashSet;
use std::fs;

use tracing::{debug, instrument};

use crate::config::StopWordSource;
use crate::error::{Result, StopWordsError};

/// English list compiled into the crate
const EMBEDDED_ENGLISH: &str = include_str!("stop_words.txt");

/// Ordered, case-insensitive stop-word set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    /// Words in order of first appearance, lowercase
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl StopWordSet {
    /// Load the set described by `source`
    #[instrument]
    pub fn load(source: &StopWordSource) -> Result<Self> {
        let set = match source {
            StopWordSource::Embedded => Self::parse(EMBEDDED_ENGLISH),
            StopWordSource::File(path) => {
                let contents = fs::read_to_string(path).map_err(|source| StopWordsError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                Self::parse(&contents)
            }
            StopWordSource::Inline(words) => Self::from_words(words),
        };

        debug!("Loaded {} stop words", set.len());
        Ok(set)
    }

    /// The embedded English list
    pub fn english() -> Self {
        Self::parse(EMBEDDED_ENGLISH)
    }

    /// Parse newline-delimited text; blank lines and `#` comments are ignored
    pub fn parse(contents: &str) -> Self {
        Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Build a set from a list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && set.lookup.insert(word.clone()) {
                set.words.push(word);
            }
        }
        set
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    /// Words in load order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_case_insensitive_membership() {
        let set = StopWordSet::from_words(["the", "A"]);
        assert!(set.contains("THE"));
        assert!(set.contains("the"));
        assert!(set.contains("a"));
        assert!(!set.contains("cat"));
    }

    #[test]
    fn test_parse_keeps_order_and_skips_noise() {
        let set = StopWordSet::parse("# comment\nthe\n\n  a  \nThe\nof\r\n");
        assert_eq!(set.words(), &["the", "a", "of"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_embedded_list() {
        let set = StopWordSet::english();
        assert!(!set.is_empty());
        assert!(set.contains("the"));
        assert!(set.contains("WON'T"));
        assert!(!set.contains("analyzer"));
    }

    #[test]
    fn test_load_missing_file() {
        let source = StopWordSource::File(PathBuf::from("/nonexistent/stop_words.txt"));
        let err = StopWordSet::load(&source).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stop_words.txt"));
    }

    #[test]
    fn test_load_inline() {
        let source = StopWordSource::Inline(vec!["and".to_string(), "or".to_string()]);
        let set = StopWordSet::load(&source).unwrap();
        assert_eq!(set.words(), &["and", "or"]);
    }
}
