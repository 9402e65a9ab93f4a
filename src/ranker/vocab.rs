use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ranker::token::TermFrequency;

/// Bounded vocabulary for one batch of documents.
///
/// Document frequency is counted across the whole batch, then only the top
/// `max_terms` terms by descending document frequency are retained. Ties are
/// broken by first appearance across the batch: the document-frequency map is
/// filled by scanning documents in order, and the stable sort used for
/// selection preserves that insertion order among equal counts.
///
/// Rebuilt on every ranking call; never cached across calls, so scores are
/// only comparable within one batch.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Vocabulary {
    /// Retained term -> document frequency. Map index is the vector dimension.
    #[serde(with = "indexmap::map::serde_seq")]
    terms: IndexMap<String, u32>,
    /// Number of documents in the batch, for IDF.
    doc_num: u64,
}

impl Vocabulary {
    /// Build the capped vocabulary from a batch of per-document term counts.
    pub fn build(documents: &[TermFrequency], max_terms: usize) -> Self {
        let mut doc_freq: IndexMap<&str, u32> = IndexMap::new();
        for doc in documents {
            for term in doc.term_set_ref_str() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, u32)> = doc_freq.into_iter().collect();
        // Stable sort: equal document frequencies keep first-appearance order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_terms);

        let terms = ranked
            .into_iter()
            .map(|(term, df)| (term.to_string(), df))
            .collect();
        Vocabulary {
            terms,
            doc_num: documents.len() as u64,
        }
    }

    /// Vector dimension of a term, if retained.
    #[inline]
    pub fn dim_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Document frequency of the term at a dimension.
    #[inline]
    pub fn doc_freq_at(&self, dim: usize) -> u32 {
        self.terms.get_index(dim).map(|(_, &df)| df).unwrap_or(0)
    }

    /// Retained terms in dimension order.
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|s| s.as_str())
    }

    /// Number of retained terms (vector dimensionality).
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the vocabulary was built from.
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(tokens: &[&str]) -> TermFrequency {
        TermFrequency::from_tokens(tokens)
    }

    #[test]
    fn counts_document_frequency_not_term_frequency() {
        let docs = vec![doc(&["rust", "rust", "web"]), doc(&["rust"])];
        let vocab = Vocabulary::build(&docs, 10);
        // "rust" appears in 2 documents even though 3 times overall.
        let dim = vocab.dim_of("rust").unwrap();
        assert_eq!(vocab.doc_freq_at(dim), 2);
        assert_eq!(vocab.doc_freq_at(vocab.dim_of("web").unwrap()), 1);
        assert_eq!(vocab.doc_num(), 2);
    }

    #[test]
    fn caps_by_document_frequency() {
        let docs = vec![
            doc(&["common", "rare1"]),
            doc(&["common", "rare2"]),
            doc(&["common", "rare3"]),
        ];
        let vocab = Vocabulary::build(&docs, 1);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.dim_of("common"), Some(0));
        assert_eq!(vocab.dim_of("rare1"), None);
    }

    #[test]
    fn ties_break_by_first_appearance() {
        let docs = vec![doc(&["zeta", "alpha"]), doc(&["mid"])];
        // All terms have df=1; "zeta" appeared first, then "alpha", then "mid".
        let vocab = Vocabulary::build(&docs, 2);
        assert_eq!(vocab.dim_of("zeta"), Some(0));
        assert_eq!(vocab.dim_of("alpha"), Some(1));
        assert_eq!(vocab.dim_of("mid"), None);
    }

    #[test]
    fn empty_batch_yields_empty_vocabulary() {
        let vocab = Vocabulary::build(&[], 100);
        assert!(vocab.is_empty());
        assert_eq!(vocab.doc_num(), 0);
    }
}
