use std::collections::HashSet;

use skillmatch::{
    CourseRecommendPolicy, CourseRecord, MentorMatchPolicy, Role, UserRecord,
};

fn main() {
    // learner profile
    let learner = UserRecord {
        skills: vec!["python".into(), "django".into()],
        interests: vec!["web development".into()],
        bio: "Learning to build backends".into(),
        role: Role::Learner,
    };

    // mentor pool, already filtered to role = mentor by the caller
    let mentors = vec![
        UserRecord {
            skills: vec!["solar installation".into()],
            interests: vec!["renewable energy".into()],
            bio: "Green tech veteran".into(),
            role: Role::Mentor,
        },
        UserRecord {
            skills: vec!["python".into(), "django".into(), "rest apis".into()],
            interests: vec!["mentoring".into()],
            bio: "Backend engineer".into(),
            role: Role::Mentor,
        },
    ];

    let matcher = MentorMatchPolicy::new();
    let best = matcher.find_best_mentor(&learner, &mentors);
    println!("best mentor: {:?}", best.map(|m| &m.skills));

    // course catalog
    let courses = vec![
        CourseRecord {
            id: 1u32,
            title: "Solar Panel Installation".into(),
            description: "Hands-on renewable energy skills".into(),
            category: "renewable_energy".into(),
            is_active: true,
        },
        CourseRecord {
            id: 2,
            title: "Django for Beginners".into(),
            description: "Build web apps with Python and Django".into(),
            category: "coding".into(),
            is_active: true,
        },
        CourseRecord {
            id: 3,
            title: "Digital Literacy Basics".into(),
            description: "Email, browsers, and online safety".into(),
            category: "digital_literacy".into(),
            is_active: true,
        },
    ];
    let completed: HashSet<u32> = [3].into_iter().collect();

    let recommender = CourseRecommendPolicy::new();
    let recs = recommender.recommend(&learner, &courses, &completed, 5);
    for course in &recs {
        println!("recommended: {} ({})", course.title, course.category);
    }
}
