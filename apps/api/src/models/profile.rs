use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::recommendations::models::{Profile, Recommendation};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub id: Uuid,
    /// Identity-provider user id.
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub interests: Option<String>,
    pub performance: Option<String>,
    pub career_aspirations: Option<String>,
    pub skill_building_needs: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfileRow {
    /// Unset columns become empty fields.
    pub fn to_profile(&self) -> Profile {
        Profile {
            interests: self.interests.clone().unwrap_or_default(),
            performance: self.performance.clone().unwrap_or_default(),
            career_aspirations: self.career_aspirations.clone().unwrap_or_default(),
            skill_building_needs: self.skill_building_needs.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecommendationRow> for Recommendation {
    fn from(row: UserRecommendationRow) -> Self {
        Recommendation {
            title: row.title,
            kind: row.kind,
            description: row.description,
            link: row.link,
        }
    }
}
