//! Token frequency aggregation
//!
//! Tokens are grouped in first-encounter order and then stably sorted by
//! descending count, so ties keep the order in which the tokens first
//! appeared. No secondary (alphabetical) key is applied.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tokenizer::split_joined;

/// A token and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Normalized token
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Ordered token → count table, most frequent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
}

impl FrequencyTable {
    /// Group `tokens`, count them and order by descending count
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for token in tokens {
            match index.get(token) {
                Some(&slot) => entries[slot].count += 1,
                None => {
                    index.insert(token, entries.len());
                    entries.push(WordCount {
                        word: token.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // sort_by is stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// Occurrence count for `word` (exact match)
    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.count)
    }

    /// Whether `word` is present
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no token was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    /// The first `n` entries
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Tokens in order
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count the tokens of a comma/space-joined string that satisfy `include`
///
/// Returns `None` when `joined` is absent or empty ("no data"), which is
/// distinct from `Some` of an empty table ("zero occurrences").
pub fn count_occurrences<F>(joined: Option<&str>, include: F) -> Option<FrequencyTable>
where
    F: Fn(&str) -> bool,
{
    let joined = joined.filter(|s| !s.is_empty())?;
    Some(FrequencyTable::from_tokens(
        split_joined(joined).filter(|token| include(token)),
    ))
}
