use num::Float;

use crate::ranker::token::TermFrequency;
use crate::ranker::vocab::Vocabulary;

/// Weighting seam of the ranker.
///
/// Implementors turn a batch vocabulary into an IDF vector and a per-document
/// term-count profile into an L2-normalized TF-IDF vector. Generic over the
/// float width so callers can trade precision for footprint.
pub trait TfidfEngine<N>
where
    N: Float,
{
    /// IDF value for every retained vocabulary dimension.
    fn idf_vec(vocab: &Vocabulary) -> Vec<N>;

    /// L2-normalized TF-IDF vector of one document over the vocabulary.
    /// A document sharing no term with the vocabulary yields the zero vector,
    /// never NaN.
    fn weight_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[N]) -> Vec<N>;
}

/// Smoothed TF-IDF: raw term counts weighted by
/// `ln((1 + doc_num) / (1 + doc_freq)) + 1`.
///
/// The smoothing keeps every retained term at a nonzero weight and cannot
/// divide by zero, so a term present in every document of the batch still
/// contributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothedTfidfEngine;

impl SmoothedTfidfEngine {
    fn idf_vec_impl<N: Float>(vocab: &Vocabulary) -> Vec<N> {
        let doc_num = vocab.doc_num() as f64;
        (0..vocab.len())
            .map(|dim| {
                let df = vocab.doc_freq_at(dim) as f64;
                let idf = ((1.0 + doc_num) / (1.0 + df)).ln() + 1.0;
                N::from(idf).unwrap_or_else(N::one)
            })
            .collect()
    }

    fn weight_vec_impl<N: Float>(
        freq: &TermFrequency,
        vocab: &Vocabulary,
        idf: &[N],
    ) -> Vec<N> {
        let mut vec = vec![N::zero(); vocab.len()];
        for (term, count) in freq.iter() {
            if let Some(dim) = vocab.dim_of(term) {
                let tf = N::from(count).unwrap_or_else(N::zero);
                vec[dim] = tf * idf[dim];
            }
        }

        let norm = vec
            .iter()
            .fold(N::zero(), |acc, &w| acc + w * w)
            .sqrt();
        if norm > N::zero() {
            for w in &mut vec {
                *w = *w / norm;
            }
        }
        vec
    }
}

impl TfidfEngine<f32> for SmoothedTfidfEngine {
    fn idf_vec(vocab: &Vocabulary) -> Vec<f32> {
        Self::idf_vec_impl(vocab)
    }

    fn weight_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[f32]) -> Vec<f32> {
        Self::weight_vec_impl(freq, vocab, idf)
    }
}

impl TfidfEngine<f64> for SmoothedTfidfEngine {
    fn idf_vec(vocab: &Vocabulary) -> Vec<f64> {
        Self::idf_vec_impl(vocab)
    }

    fn weight_vec(freq: &TermFrequency, vocab: &Vocabulary, idf: &[f64]) -> Vec<f64> {
        Self::weight_vec_impl(freq, vocab, idf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[&str]) -> TermFrequency {
        TermFrequency::from_tokens(tokens)
    }

    #[test]
    fn idf_is_smoothed_and_positive() {
        let docs = vec![doc(&["everywhere", "rare"]), doc(&["everywhere"])];
        let vocab = Vocabulary::build(&docs, 10);
        let idf: Vec<f64> = SmoothedTfidfEngine::idf_vec(&vocab);
        let everywhere = idf[vocab.dim_of("everywhere").unwrap()];
        let rare = idf[vocab.dim_of("rare").unwrap()];
        // ln((1+2)/(1+2)) + 1 = 1 for a term in every document.
        assert!((everywhere - 1.0).abs() < 1e-12);
        assert!(rare > everywhere);
    }

    #[test]
    fn weight_vectors_are_unit_norm() {
        let docs = vec![doc(&["rust", "rust", "web"]), doc(&["solar"])];
        let vocab = Vocabulary::build(&docs, 10);
        let idf: Vec<f64> = SmoothedTfidfEngine::idf_vec(&vocab);
        let vec = SmoothedTfidfEngine::weight_vec(&docs[0], &vocab, &idf);
        let norm: f64 = vec.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_vocabulary_document_is_zero_vector_not_nan() {
        let docs = vec![doc(&["rust"])];
        let vocab = Vocabulary::build(&docs, 10);
        let idf: Vec<f64> = SmoothedTfidfEngine::idf_vec(&vocab);
        let vec = SmoothedTfidfEngine::weight_vec(&doc(&["cobol"]), &vocab, &idf);
        assert!(vec.iter().all(|w| *w == 0.0));
    }
}
