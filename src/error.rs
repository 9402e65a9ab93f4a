use thiserror::Error;

/// Failure conditions signalled by the ranking engine.
///
/// Both variants are degeneracy signals rather than hard failures: the policy
/// layer catches them and substitutes a deterministic positional fallback, so
/// neither ever escapes `find_best_mentor` / `recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The query text, or every candidate text, is empty or whitespace.
    /// Vectorizing such a batch would be meaningless, so it is skipped.
    #[error("insufficient text to rank: query or all candidates are empty")]
    InsufficientData,

    /// Vectorization produced a non-finite score. Should not happen for
    /// well-formed input; kept so a partial or garbage result can never be
    /// mistaken for a ranking.
    #[error("similarity computation produced a non-finite score")]
    ComputationFailed,
}
