use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-document term counts.
///
/// Backed by an `IndexMap` so iteration follows first-appearance order of the
/// terms in the document. That ordering is load-bearing: vocabulary selection
/// breaks document-frequency ties by first appearance, which is what makes a
/// ranking call bit-reproducible.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count a document's tokens in one pass.
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = TermFrequency::new();
        freq.add_terms(tokens);
        freq
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        *self.term_count.entry(term.to_string()).or_insert(0) += 1;
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrence count of one term in this document.
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Sum of all term counts (document length after filtering).
    #[inline]
    pub fn term_total_count(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms.
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Distinct terms in first-appearance order.
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// (term, count) pairs in first-appearance order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, &c)| (t.as_str(), c))
    }
}
