/// Content-based matching for a youth-education platform: mentor-to-learner
/// pairing and course recommendation over TF-IDF profile vectors.
///
/// The crate owns no persistence, HTTP, or auth. Callers hand it
/// already-fetched records; it hands back ranked results. Every ranking call
/// is a fresh, self-contained batch computation: vocabularies and vectors
/// never survive a call, so scores are only comparable within one call.
pub mod error;
pub mod policy;
pub mod profile;
pub mod ranker;

/// Similarity Ranker
/// The core engine of this crate. Given a query text and a list of candidate
/// texts, it vectorizes the whole batch with smoothed TF-IDF over a capped,
/// document-frequency-ranked vocabulary and returns the cosine similarity of
/// the query against every candidate, order preserved.
///
/// `SimilarityRanker<N, E>` has the following generic parameters:
/// - `N`: vector element type (`f32` or `f64`, default `f64`)
/// - `E`: TF-IDF weighting engine (default `SmoothedTfidfEngine`)
///
/// Degenerate batches (empty query, or every candidate empty) signal
/// `RankError::InsufficientData` instead of producing NaN scores; policies
/// consume that signal and fall back positionally.
pub use ranker::SimilarityRanker;

/// TF-IDF Weighting Engine Trait
/// The seam for plugging different weighting strategies into
/// `SimilarityRanker<N, E>`. The provided `SmoothedTfidfEngine` computes
/// `tf * (ln((1 + N) / (1 + df)) + 1)` and L2-normalizes each document, so
/// cosine similarity reduces to a dot product.
pub use ranker::tfidf::{SmoothedTfidfEngine, TfidfEngine};

/// Term Frequency structure
/// Per-document term counts behind the vectorizer. Iteration order is first
/// appearance, which drives the deterministic vocabulary tie-break.
pub use ranker::token::TermFrequency;

/// Bounded Vocabulary
/// Per-batch term-to-dimension mapping, capped by document-frequency rank.
pub use ranker::vocab::Vocabulary;

/// Ranked Hits and Hit Entry structures
/// - `Hits`: ranked result list with stable descending-score sorting
/// - `HitEntry`: one (key, score) pair
pub use ranker::scoring::{HitEntry, Hits};

/// Mentor Match Policy
/// Applies the ranker to a learner profile against mentor profiles
/// (vocabulary cap 1000) and owns the first-mentor fallback for sparse or
/// degenerate data. Returns `None` only for an empty mentor list.
pub use policy::mentor::MentorMatchPolicy;

/// Course Recommend Policy
/// Applies the ranker to a learner's skills-and-interests signal against
/// candidate courses (vocabulary cap 500), excluding completed courses and
/// limiting result size. Degrades to catalog order rather than failing.
pub use policy::course::CourseRecommendPolicy;

/// Entity records consumed by the policies, mirroring the platform's user and
/// course models. `CourseRecord<K>` is generic over the caller's opaque id.
pub use profile::{CourseRecord, Role, UserRecord};

/// Error taxonomy of the ranking engine. Both variants are absorbed by the
/// policy layer; callers of the policies never see them.
pub use error::RankError;
