use serde::{Deserialize, Serialize};

use crate::recommendations::models::Recommendation;

const ACADEMIC_MARKERS: &[&str] = &["academic", "course", "resource"];
const EXTRACURRICULAR_MARKERS: &[&str] = &["extracurricular", "activity", "workshop", "event"];

/// Case-insensitive search over stored recommendations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationFilter {
    /// Matches title or description.
    pub q: Option<String>,
    /// Matches the free-text type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl RecommendationFilter {
    pub fn matches(&self, rec: &Recommendation) -> bool {
        let matches_search = match non_blank(&self.q) {
            Some(q) => {
                rec.title.to_lowercase().contains(&q) || rec.description.to_lowercase().contains(&q)
            }
            None => true,
        };
        let matches_kind = match non_blank(&self.kind) {
            Some(kind) => rec.kind.to_lowercase().contains(&kind),
            None => true,
        };
        matches_search && matches_kind
    }

    pub fn apply(&self, items: Vec<Recommendation>) -> Vec<Recommendation> {
        items.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Recommendations split the way the dashboard shows them.
/// A record can land in both groups, or in neither.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryGroups {
    pub academic: Vec<Recommendation>,
    pub extracurricular: Vec<Recommendation>,
}

pub fn group_by_category(items: &[Recommendation]) -> CategoryGroups {
    let has_marker = |rec: &Recommendation, markers: &[&str]| {
        let kind = rec.kind.to_lowercase();
        markers.iter().any(|m| kind.contains(m))
    };

    CategoryGroups {
        academic: items
            .iter()
            .filter(|&r| has_marker(r, ACADEMIC_MARKERS))
            .cloned()
            .collect(),
        extracurricular: items
            .iter()
            .filter(|&r| has_marker(r, EXTRACURRICULAR_MARKERS))
            .cloned()
            .collect(),
    }
}
