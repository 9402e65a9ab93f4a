//! Entity records and text-profile building.
//!
//! The ranking engine never touches a data store; the calling layer hands it
//! already-materialized records, and these helpers flatten each record into
//! the single lowercase text blob the vectorizer consumes. No tokenization or
//! stop-word handling happens here.

use serde::{Deserialize, Serialize};

/// Platform role, mirroring the user model's role field.
/// The core does not filter by role; the caller supplies an
/// already-filtered mentor list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Learner,
    Mentor,
    Admin,
    Superadmin,
}

/// User attributes the matcher reads. All fields default to empty; an absent
/// bio is just the empty string.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub role: Role,
}

impl UserRecord {
    /// Full profile text: skills, interests, and bio, space-joined and
    /// lowercased. Used for mentor matching.
    pub fn profile_text(&self) -> String {
        format!(
            "{} {} {}",
            self.skills.join(" "),
            self.interests.join(" "),
            self.bio
        )
        .to_lowercase()
    }

    /// Narrower signal for course recommendation: skills and interests only,
    /// without the bio.
    pub fn signal_text(&self) -> String {
        format!("{} {}", self.skills.join(" "), self.interests.join(" ")).to_lowercase()
    }
}

/// Course attributes the recommender reads. `K` is the caller's opaque id
/// type, compared only for completed-course exclusion.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecord<K> {
    pub id: K,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub is_active: bool,
}

impl<K> CourseRecord<K> {
    /// Course text blob: title, description, and category, lowercased.
    pub fn profile_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_profile_is_lowercased_concatenation() {
        let user = UserRecord {
            skills: vec!["Python".into(), "Django".into()],
            interests: vec!["Web".into()],
            bio: "Aspiring Backend Dev".into(),
            role: Role::Learner,
        };
        assert_eq!(user.profile_text(), "python django web aspiring backend dev");
    }

    #[test]
    fn absent_fields_become_whitespace_only_text() {
        let user = UserRecord::default();
        assert!(user.profile_text().trim().is_empty());
        assert!(user.signal_text().trim().is_empty());
    }

    #[test]
    fn signal_text_excludes_bio() {
        let user = UserRecord {
            skills: vec!["solar".into()],
            interests: vec![],
            bio: "python enthusiast".into(),
            ..Default::default()
        };
        assert!(!user.signal_text().contains("python"));
        assert!(user.profile_text().contains("python"));
    }

    #[test]
    fn course_text_joins_title_description_category() {
        let course = CourseRecord {
            id: 7u32,
            title: "Intro to Rust".into(),
            description: "Ownership and borrowing".into(),
            category: "Coding".into(),
            is_active: true,
        };
        assert_eq!(
            course.profile_text(),
            "intro to rust ownership and borrowing coding"
        );
    }
}
