//! Axum route handlers for the Recommendations API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::recommendations::models::{Profile, Recommendation};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

/// The dashboard only asks for recommendations once interests and performance are filled in.
pub fn require_profile_basics(profile: &Profile) -> Result<(), AppError> {
    if profile.interests.trim().is_empty() || profile.performance.trim().is_empty() {
        return Err(AppError::Validation(
            "interests and performance are required".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/recommendations
///
/// Stateless: takes the profile in the body and always answers with six records.
/// Model or link failures show up as fallback content, never as an error status.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    require_profile_basics(&profile)?;

    let set = state.pipeline.recommend(&profile).await;

    Ok(Json(RecommendationsResponse {
        recommendations: set.into_vec(),
    }))
}
