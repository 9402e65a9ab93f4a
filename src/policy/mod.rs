pub mod badge;
pub mod course;
pub mod mentor;

pub use badge::{earned_badges, BadgeCriterion, BadgeRule, LearnerStats, BADGE_RULES};
pub use course::{CourseRecommendPolicy, COURSE_MAX_VOCABULARY};
pub use mentor::{MentorMatchPolicy, MENTOR_MAX_VOCABULARY};
