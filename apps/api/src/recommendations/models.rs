use serde::{Deserialize, Serialize};

/// Number of recommendations in every set handed back to callers.
pub const RECOMMENDATION_COUNT: usize = 6;

/// The four-field student self-report. All fields are opaque free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub interests: String,
    pub performance: String,
    pub career_aspirations: String,
    pub skill_building_needs: String,
}

/// A single suggested resource or activity.
///
/// Deserialization is strict: model output missing any of the four string
/// fields is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    /// Free text, loosely "Academic" or "Extracurricular".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub link: String,
}

/// Coarse category derived from a recommendation's free-text type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Academic,
    Extracurricular,
}

impl Category {
    pub fn from_type(kind: &str) -> Self {
        if kind.to_lowercase().contains("academic") {
            Category::Academic
        } else {
            Category::Extracurricular
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Extracurricular => "Extracurricular",
        }
    }
}

/// Exactly six recommendations, produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecommendationSet(Vec<Recommendation>);

impl RecommendationSet {
    /// Keeps the first six validated records, topping up positionally from
    /// `fallback` when there are fewer. Titles are not deduplicated.
    pub fn assemble(mut validated: Vec<Recommendation>, fallback: Vec<Recommendation>) -> Self {
        validated.truncate(RECOMMENDATION_COUNT);
        let missing = RECOMMENDATION_COUNT - validated.len();
        validated.extend(fallback.into_iter().take(missing));
        debug_assert_eq!(validated.len(), RECOMMENDATION_COUNT);
        Self(validated)
    }

    pub fn from_fallback(fallback: Vec<Recommendation>) -> Self {
        Self::assemble(Vec::new(), fallback)
    }

    pub fn as_slice(&self) -> &[Recommendation] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Recommendation> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
