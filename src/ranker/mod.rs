pub mod scoring;
pub mod tfidf;
pub mod token;
pub mod tokenize;
pub mod vocab;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;

use crate::error::RankError;
use crate::ranker::tfidf::{SmoothedTfidfEngine, TfidfEngine};
use crate::ranker::token::TermFrequency;
use crate::ranker::tokenize::tokenize;
use crate::ranker::vocab::Vocabulary;

/// Batch TF-IDF cosine ranking of one query against a candidate list.
///
/// Every call is self-contained: the batch is tokenized, a capped vocabulary
/// is built from scratch, and all vectors are discarded when the call
/// returns. Nothing is shared between calls, so a ranker is freely usable
/// from multiple threads and scores are only comparable within one call.
///
/// `SimilarityRanker<N, E>` has the following generic parameters:
/// - `N`: vector element type (`f32` or `f64`)
/// - `E`: TF-IDF weighting engine (default `SmoothedTfidfEngine`)
#[derive(Debug, Clone)]
pub struct SimilarityRanker<N = f64, E = SmoothedTfidfEngine>
where
    N: Float + Send + Sync,
    E: TfidfEngine<N> + Send + Sync,
{
    max_vocabulary: usize,
    _marker: PhantomData<(N, E)>,
}

impl<N, E> SimilarityRanker<N, E>
where
    N: Float + Send + Sync,
    E: TfidfEngine<N> + Send + Sync,
{
    /// Create a ranker whose per-batch vocabulary is capped at
    /// `max_vocabulary` terms (excess terms drop by document-frequency rank).
    pub fn new(max_vocabulary: usize) -> Self {
        SimilarityRanker {
            max_vocabulary,
            _marker: PhantomData,
        }
    }

    pub fn max_vocabulary(&self) -> usize {
        self.max_vocabulary
    }

    /// Score every candidate text against the query text.
    ///
    /// Output length equals the candidate count and order is preserved; each
    /// value is the cosine similarity of the query's TF-IDF vector against
    /// that candidate's, in [0, 1].
    ///
    /// # Errors
    /// - `RankError::InsufficientData` when the query, or every candidate, is
    ///   empty or whitespace (including an empty candidate list).
    /// - `RankError::ComputationFailed` when a score comes out non-finite.
    pub fn rank<S>(&self, query_text: &str, candidate_texts: &[S]) -> Result<Vec<f64>, RankError>
    where
        S: AsRef<str> + Sync,
    {
        if query_text.trim().is_empty()
            || candidate_texts.iter().all(|t| t.as_ref().trim().is_empty())
        {
            return Err(RankError::InsufficientData);
        }

        // Batch = query first, then candidates in input order. First-appearance
        // vocabulary tie-breaks depend on this ordering.
        let mut batch = Vec::with_capacity(1 + candidate_texts.len());
        batch.push(TermFrequency::from_tokens(&tokenize(query_text)));
        batch.extend(
            candidate_texts
                .iter()
                .map(|t| TermFrequency::from_tokens(&tokenize(t.as_ref()))),
        );
        let vocab = Vocabulary::build(&batch, self.max_vocabulary);

        let idf: Vec<N> = E::idf_vec(&vocab);
        let query_vec: Vec<N> = E::weight_vec(&batch[0], &vocab, &idf);

        // Indexed parallel map keeps the output aligned with the input order.
        let scores: Vec<f64> = batch[1..]
            .par_iter()
            .map(|freq| {
                let cand_vec: Vec<N> = E::weight_vec(freq, &vocab, &idf);
                scoring::dot(&query_vec, &cand_vec)
            })
            .collect();

        if scores.iter().any(|s| !s.is_finite()) {
            return Err(RankError::ComputationFailed);
        }
        // Both sides are unit-norm, so only rounding can push past 1.
        Ok(scores.into_iter().map(|s| s.clamp(0.0, 1.0)).collect())
    }
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        SimilarityRanker::new(1000)
    }
}
