//! Axum route handlers for the Profiles API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfileRow;
use crate::profiles::store::{
    ensure_profile, get_profile, list_recommendations, replace_recommendations, upsert_profile,
    ProfileUpdate,
};
use crate::recommendations::filter::{group_by_category, CategoryGroups, RecommendationFilter};
use crate::recommendations::handlers::{require_profile_basics, RecommendationsResponse};
use crate::recommendations::models::Recommendation;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsureProfileRequest {
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedRecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(flatten)]
    pub groups: CategoryGroups,
}

fn db(state: &AppState) -> Result<&PgPool, AppError> {
    state.db.as_ref().ok_or(AppError::PersistenceDisabled)
}

/// POST /api/v1/profiles/:user_id
///
/// Creates an empty profile on first sign-in. Idempotent.
pub async fn handle_ensure_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    body: Option<Json<EnsureProfileRequest>>,
) -> Result<Json<UserProfileRow>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let row = ensure_profile(db(&state)?, user_id, request.full_name.as_deref()).await?;
    Ok(Json(row))
}

/// GET /api/v1/profiles/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfileRow>, AppError> {
    let row = get_profile(db(&state)?, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(row))
}

/// PUT /api/v1/profiles/:user_id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfileRow>, AppError> {
    let row = upsert_profile(db(&state)?, user_id, &update).await?;
    Ok(Json(row))
}

/// POST /api/v1/profiles/:user_id/recommendations
///
/// Generates recommendations from the stored profile and saves them,
/// replacing the previous set.
pub async fn handle_generate_for_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let pool = db(&state)?;
    let profile = get_profile(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?
        .to_profile();
    require_profile_basics(&profile)?;

    let set = state.pipeline.recommend(&profile).await;
    replace_recommendations(pool, user_id, &set).await?;

    Ok(Json(RecommendationsResponse {
        recommendations: set.into_vec(),
    }))
}

/// GET /api/v1/profiles/:user_id/recommendations?q=&type=
pub async fn handle_list_saved(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(filter): Query<RecommendationFilter>,
) -> Result<Json<SavedRecommendationsResponse>, AppError> {
    let saved: Vec<Recommendation> = list_recommendations(db(&state)?, user_id)
        .await?
        .into_iter()
        .map(Recommendation::from)
        .collect();

    let recommendations = filter.apply(saved);
    let groups = group_by_category(&recommendations);
    Ok(Json(SavedRecommendationsResponse {
        recommendations,
        groups,
    }))
}
