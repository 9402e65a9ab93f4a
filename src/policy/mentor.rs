use tracing::{debug, warn};

use crate::error::RankError;
use crate::profile::UserRecord;
use crate::ranker::scoring::Hits;
use crate::ranker::SimilarityRanker;

/// Vocabulary cap for mentor matching batches.
pub const MENTOR_MAX_VOCABULARY: usize = 1000;

/// Picks the mentor whose profile text is most similar to the learner's.
///
/// Owns every fallback rule for sparse data: whenever similarity cannot be
/// computed, the first mentor in the caller's list is returned instead of an
/// error. Callers only ever see a mentor or `None` (empty list), never a
/// ranking failure.
#[derive(Debug, Clone)]
pub struct MentorMatchPolicy {
    ranker: SimilarityRanker,
}

impl MentorMatchPolicy {
    pub fn new() -> Self {
        MentorMatchPolicy {
            ranker: SimilarityRanker::new(MENTOR_MAX_VOCABULARY),
        }
    }

    /// Best mentor for the learner, or `None` when `mentors` is empty.
    ///
    /// The caller supplies the candidate list already filtered to mentors;
    /// this policy never queries anything. Ties break to the earliest mentor
    /// in the list.
    pub fn find_best_mentor<'a>(
        &self,
        learner: &UserRecord,
        mentors: &'a [UserRecord],
    ) -> Option<&'a UserRecord> {
        if mentors.is_empty() {
            return None;
        }

        let learner_profile = learner.profile_text();
        let mentor_profiles: Vec<String> =
            mentors.iter().map(|m| m.profile_text()).collect();

        if learner_profile.trim().is_empty()
            || mentor_profiles.iter().all(|p| p.trim().is_empty())
        {
            debug!("no usable profile text, falling back to first mentor");
            return Some(&mentors[0]);
        }

        match self.ranker.rank(&learner_profile, &mentor_profiles) {
            Ok(scores) => {
                let hits = Hits::from_scores(0..mentors.len(), &scores);
                // best() resolves score ties to the earliest position.
                hits.best().map(|entry| &mentors[entry.key])
            }
            Err(RankError::InsufficientData) => {
                debug!("batch too sparse to vectorize, falling back to first mentor");
                Some(&mentors[0])
            }
            Err(err @ RankError::ComputationFailed) => {
                warn!(%err, "mentor ranking failed, falling back to first mentor");
                Some(&mentors[0])
            }
        }
    }

    /// Similarity of every mentor against the learner, in input order, for
    /// callers that want the full score audit rather than just the winner.
    pub fn score_mentors(
        &self,
        learner: &UserRecord,
        mentors: &[UserRecord],
    ) -> Result<Hits<usize>, RankError> {
        let learner_profile = learner.profile_text();
        let mentor_profiles: Vec<String> =
            mentors.iter().map(|m| m.profile_text()).collect();
        let scores = self.ranker.rank(&learner_profile, &mentor_profiles)?;
        Ok(Hits::from_scores(0..mentors.len(), &scores))
    }
}

impl Default for MentorMatchPolicy {
    fn default() -> Self {
        MentorMatchPolicy::new()
    }
}
