//! Profile and saved-recommendation persistence.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::profile::{UserProfileRow, UserRecommendationRow};
use crate::recommendations::models::RecommendationSet;

/// Profile fields accepted on write. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub interests: Option<String>,
    pub performance: Option<String>,
    pub career_aspirations: Option<String>,
    pub skill_building_needs: Option<String>,
}

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, UserProfileRow>("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Creates an empty profile row for a user seen for the first time.
/// Existing rows are left untouched.
pub async fn ensure_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: Option<&str>,
) -> Result<UserProfileRow, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_profiles (user_id, full_name)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(full_name)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, UserProfileRow>("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<UserProfileRow, sqlx::Error> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        r#"
        INSERT INTO user_profiles
            (user_id, full_name, interests, performance, career_aspirations, skill_building_needs)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE SET
            full_name = COALESCE(EXCLUDED.full_name, user_profiles.full_name),
            interests = COALESCE(EXCLUDED.interests, user_profiles.interests),
            performance = COALESCE(EXCLUDED.performance, user_profiles.performance),
            career_aspirations = COALESCE(EXCLUDED.career_aspirations, user_profiles.career_aspirations),
            skill_building_needs = COALESCE(EXCLUDED.skill_building_needs, user_profiles.skill_building_needs),
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&update.full_name)
    .bind(&update.interests)
    .bind(&update.performance)
    .bind(&update.career_aspirations)
    .bind(&update.skill_building_needs)
    .fetch_one(pool)
    .await?;

    info!("Saved profile for user {user_id}");
    Ok(row)
}

/// Replaces the user's saved recommendations with `set`, atomically.
pub async fn replace_recommendations(
    pool: &PgPool,
    user_id: Uuid,
    set: &RecommendationSet,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM user_recommendations WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    for rec in set.as_slice() {
        sqlx::query(
            r#"
            INSERT INTO user_recommendations (user_id, title, type, description, link)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(&rec.title)
        .bind(&rec.kind)
        .bind(&rec.description)
        .bind(&rec.link)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!("Saved {} recommendations for user {user_id}", set.len());
    Ok(())
}

/// Saved recommendations in insertion order.
pub async fn list_recommendations(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<UserRecommendationRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRecommendationRow>(
        "SELECT * FROM user_recommendations WHERE user_id = $1 ORDER BY created_at, seq",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
