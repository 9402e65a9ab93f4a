use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::error::RankError;
use crate::profile::{CourseRecord, UserRecord};
use crate::ranker::scoring::Hits;
use crate::ranker::SimilarityRanker;

/// Vocabulary cap for course recommendation batches.
pub const COURSE_MAX_VOCABULARY: usize = 500;

/// Ranks candidate courses against a learner's skills and interests.
///
/// The learner signal deliberately excludes the bio: course text is short and
/// topical, so free-form bios add more noise than signal here. Completed
/// courses are excluded before ranking; every degenerate case degrades to the
/// first `limit` candidates in input order rather than an error or an empty
/// result.
#[derive(Debug, Clone)]
pub struct CourseRecommendPolicy {
    ranker: SimilarityRanker,
}

impl CourseRecommendPolicy {
    pub fn new() -> Self {
        CourseRecommendPolicy {
            ranker: SimilarityRanker::new(COURSE_MAX_VOCABULARY),
        }
    }

    /// Up to `limit` courses for the learner, most similar first.
    ///
    /// `courses` is the caller's already-fetched active-course list;
    /// `completed_ids` removes finished courses from consideration. When the
    /// exclusion empties the candidate set, the first `limit` of the
    /// unfiltered list are returned so the learner still sees something.
    pub fn recommend<K>(
        &self,
        learner: &UserRecord,
        courses: &[CourseRecord<K>],
        completed_ids: &HashSet<K>,
        limit: usize,
    ) -> Vec<CourseRecord<K>>
    where
        K: Clone + Eq + Hash,
    {
        let candidates: Vec<&CourseRecord<K>> = courses
            .iter()
            .filter(|c| !completed_ids.contains(&c.id))
            .collect();

        if candidates.is_empty() {
            debug!("every course completed, recommending from the unfiltered list");
            return courses.iter().take(limit).cloned().collect();
        }

        let signal = learner.signal_text();
        let candidate_texts: Vec<String> =
            candidates.iter().map(|c| c.profile_text()).collect();

        if signal.trim().is_empty() || candidate_texts.iter().all(|t| t.trim().is_empty()) {
            debug!("no usable text, recommending first candidates in order");
            return candidates.into_iter().take(limit).cloned().collect();
        }

        match self.ranker.rank(&signal, &candidate_texts) {
            Ok(scores) => {
                let mut hits = Hits::from_scores(0..candidates.len(), &scores);
                // Stable sort: equal scores keep catalog order.
                hits.sort_by_score_desc().truncate(limit);
                hits.into_keys()
                    .into_iter()
                    .map(|i| candidates[i].clone())
                    .collect()
            }
            Err(RankError::InsufficientData) => {
                debug!("batch too sparse to vectorize, recommending first candidates");
                candidates.into_iter().take(limit).cloned().collect()
            }
            Err(err @ RankError::ComputationFailed) => {
                warn!(%err, "course ranking failed, recommending first candidates");
                candidates.into_iter().take(limit).cloned().collect()
            }
        }
    }
}

impl Default for CourseRecommendPolicy {
    fn default() -> Self {
        CourseRecommendPolicy::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn course(id: u32, title: &str, category: &str) -> CourseRecord<u32> {
        CourseRecord {
            id,
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            is_active: true,
        }
    }

    fn learner(skills: &[&str], interests: &[&str]) -> UserRecord {
        UserRecord {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<CourseRecord<u32>> {
        vec![
            course(1, "Solar Panel Installation", "renewable_energy"),
            course(2, "Python Web Development with Django", "coding"),
            course(3, "Digital Literacy Basics", "digital_literacy"),
        ]
    }

    #[test]
    fn ranks_matching_course_first() {
        let policy = CourseRecommendPolicy::new();
        let recs = policy.recommend(
            &learner(&["python", "django"], &["web"]),
            &catalog(),
            &HashSet::new(),
            5,
        );
        assert_eq!(recs[0].id, 2);
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn never_recommends_completed_courses() {
        let policy = CourseRecommendPolicy::new();
        let completed: HashSet<u32> = [2].into_iter().collect();
        let recs = policy.recommend(
            &learner(&["python", "django"], &["web"]),
            &catalog(),
            &completed,
            5,
        );
        assert!(recs.iter().all(|c| c.id != 2));
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn all_completed_degrades_to_unfiltered_prefix() {
        let policy = CourseRecommendPolicy::new();
        let completed: HashSet<u32> = [1, 2, 3].into_iter().collect();
        let recs = policy.recommend(
            &learner(&["python"], &[]),
            &catalog(),
            &completed,
            2,
        );
        let ids: Vec<u32> = recs.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn blank_learner_signal_returns_candidates_in_order() {
        let policy = CourseRecommendPolicy::new();
        let recs = policy.recommend(
            &learner(&[], &[]),
            &catalog(),
            &HashSet::new(),
            2,
        );
        let ids: Vec<u32> = recs.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn bio_does_not_leak_into_the_signal() {
        let policy = CourseRecommendPolicy::new();
        let mut user = learner(&["solar"], &[]);
        user.bio = "python django everywhere".into();
        let recs = policy.recommend(&user, &catalog(), &HashSet::new(), 1);
        // Only the skills/interests signal counts, so solar wins.
        assert_eq!(recs[0].id, 1);
    }

    #[test]
    fn limit_zero_returns_empty() {
        let policy = CourseRecommendPolicy::new();
        let recs = policy.recommend(
            &learner(&["python"], &[]),
            &catalog(),
            &HashSet::new(),
            0,
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn limit_beyond_candidate_count_returns_all_without_padding() {
        let policy = CourseRecommendPolicy::new();
        let recs = policy.recommend(
            &learner(&["python"], &[]),
            &catalog(),
            &HashSet::new(),
            50,
        );
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn empty_catalog_returns_empty() {
        let policy = CourseRecommendPolicy::new();
        let courses: Vec<CourseRecord<u32>> = Vec::new();
        let recs = policy.recommend(&learner(&["python"], &[]), &courses, &HashSet::new(), 5);
        assert!(recs.is_empty());
    }

    #[test]
    fn ties_preserve_catalog_order() {
        let policy = CourseRecommendPolicy::new();
        // Two courses with no overlap with the learner both score zero.
        let courses = vec![
            course(10, "Woodworking", "other"),
            course(11, "Metalworking", "other"),
        ];
        let recs = policy.recommend(
            &learner(&["painting"], &[]),
            &courses,
            &HashSet::new(),
            2,
        );
        let ids: Vec<u32> = recs.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn string_ids_work_as_opaque_keys() {
        let policy = CourseRecommendPolicy::new();
        let courses = vec![CourseRecord {
            id: "course-a".to_string(),
            title: "Python Basics".into(),
            description: "Variables and loops".into(),
            category: "coding".into(),
            is_active: true,
        }];
        let completed: HashSet<String> = HashSet::new();
        let recs = policy.recommend(&learner(&["python"], &[]), &courses, &completed, 5);
        assert_eq!(recs[0].id, "course-a");
    }
}
