//! Badge award rules as a static table.
//!
//! The caller precomputes a learner's statistics and evaluates them here;
//! get-or-create persistence of awarded badges stays with the CRUD layer.

use serde::{Deserialize, Serialize};

/// Precomputed achievement counters for one learner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LearnerStats {
    pub completed_courses: u32,
    pub coding_courses: u32,
    pub renewable_energy_courses: u32,
    pub mentorship_sessions: u32,
}

/// A single threshold over `LearnerStats`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCriterion {
    CompletedCourses(u32),
    CodingCourses(u32),
    RenewableEnergyCourses(u32),
    MentorshipSessions(u32),
}

impl BadgeCriterion {
    pub fn is_met(&self, stats: &LearnerStats) -> bool {
        match *self {
            BadgeCriterion::CompletedCourses(n) => stats.completed_courses >= n,
            BadgeCriterion::CodingCourses(n) => stats.coding_courses >= n,
            BadgeCriterion::RenewableEnergyCourses(n) => stats.renewable_energy_courses >= n,
            BadgeCriterion::MentorshipSessions(n) => stats.mentorship_sessions >= n,
        }
    }
}

/// Badge definition: name, description, and the criterion that awards it.
/// Serialize-only; the catalog is compiled in, never read back.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub name: &'static str,
    pub description: &'static str,
    pub criterion: BadgeCriterion,
}

/// The platform's badge catalog.
pub const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule {
        name: "First Steps",
        description: "Awarded for completing your first course",
        criterion: BadgeCriterion::CompletedCourses(1),
    },
    BadgeRule {
        name: "Code Master",
        description: "Awarded for completing 5 coding courses",
        criterion: BadgeCriterion::CodingCourses(5),
    },
    BadgeRule {
        name: "Green Tech Pioneer",
        description: "Awarded for completing 1 renewable energy course",
        criterion: BadgeCriterion::RenewableEnergyCourses(1),
    },
    BadgeRule {
        name: "Learning Enthusiast",
        description: "Awarded for completing 10 courses",
        criterion: BadgeCriterion::CompletedCourses(10),
    },
    BadgeRule {
        name: "Mentor Ally",
        description: "Awarded for completing 10 mentorship sessions",
        criterion: BadgeCriterion::MentorshipSessions(10),
    },
];

/// Every badge the stats currently qualify for, in catalog order. The caller
/// diffs against already-persisted badges.
pub fn earned_badges(stats: &LearnerStats) -> Vec<&'static BadgeRule> {
    BADGE_RULES
        .iter()
        .filter(|rule| rule.criterion.is_met(stats))
        .collect()
}
