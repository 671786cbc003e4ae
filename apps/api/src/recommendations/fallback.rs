//! Deterministic default recommendations, computed purely from a profile.
//!
//! Used whenever the model is unavailable or unparseable, and to top up short
//! model output. Links are built from the search templates, so they need no probe.

use crate::recommendations::links::search_link;
use crate::recommendations::models::{Category, Profile, Recommendation};

/// Six records: three Academic, then three Extracurricular.
pub fn fallback_recommendations(profile: &Profile) -> Vec<Recommendation> {
    let interests = profile.interests.trim();
    let career = profile.career_aspirations.trim();
    let skills = profile.skill_building_needs.trim();

    vec![
        entry(
            "Personalized Course Recommendations",
            Category::Academic,
            format!("Find courses matching your interests in {interests}"),
            &query(&[interests, career]),
        ),
        entry(
            "Career Development Resources",
            Category::Academic,
            format!("Resources to help with your career goals in {career}"),
            &query(&[career, "career"]),
        ),
        entry(
            "Online Learning Platforms",
            Category::Academic,
            format!("Explore top online learning resources for {interests}"),
            &query(&[interests, "learning platforms"]),
        ),
        entry(
            "Skill Building Workshops",
            Category::Extracurricular,
            format!("Improve your {skills} skills through hands-on workshops"),
            &query(&[skills, "training"]),
        ),
        entry(
            "Networking Events",
            Category::Extracurricular,
            format!("Connect with professionals working toward {career}"),
            &query(&[career, "networking"]),
        ),
        entry(
            "Volunteer Opportunities",
            Category::Extracurricular,
            format!("Gain experience in {interests} through volunteering"),
            &query(&[interests]),
        ),
    ]
}

fn entry(title: &str, category: Category, description: String, query: &str) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        kind: category.label().to_string(),
        description,
        link: search_link(query, category),
    }
}

/// Joins the non-blank parts with single spaces.
fn query(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
