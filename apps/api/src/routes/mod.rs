pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profiles::handlers as profiles;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendations API (stateless)
        .route(
            "/api/v1/recommendations",
            post(recommendations::handle_recommend),
        )
        // Profiles API (requires DATABASE_URL)
        .route(
            "/api/v1/profiles/:user_id",
            get(profiles::handle_get_profile)
                .post(profiles::handle_ensure_profile)
                .put(profiles::handle_update_profile),
        )
        .route(
            "/api/v1/profiles/:user_id/recommendations",
            get(profiles::handle_list_saved).post(profiles::handle_generate_for_profile),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::recommendations::links::{matches_search_template, LinkProber};
    use crate::recommendations::pipeline::RecommendationPipeline;

    struct DownGenerator;

    #[async_trait]
    impl TextGenerator for DownGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    struct AlwaysReachable;

    #[async_trait]
    impl LinkProber for AlwaysReachable {
        async fn is_reachable(&self, _url: &str) -> bool {
            true
        }
    }

    fn test_state() -> AppState {
        AppState {
            db: None,
            pipeline: RecommendationPipeline::new(Arc::new(DownGenerator), Arc::new(AlwaysReachable)),
            config: Config {
                gemini_api_key: "test".to_string(),
                gemini_model: "gemini-1.5-pro".to_string(),
                gemini_api_url: "http://127.0.0.1:1".to_string(),
                database_url: None,
                port: 0,
                rust_log: "info".to_string(),
                link_probe_timeout: Duration::from_secs(3),
            },
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["persistence"], false);
    }

    #[tokio::test]
    async fn test_recommend_returns_six_even_when_model_is_down() {
        let (status, body) = send(post_json(
            "/api/v1/recommendations",
            json!({
                "interests": "robotics",
                "performance": "A average",
                "careerAspirations": "mechanical engineer",
                "skillBuildingNeeds": "CAD"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 6);
        for rec in recs {
            assert!(matches_search_template(rec["link"].as_str().unwrap()));
            assert!(rec["type"].is_string());
        }
    }

    #[tokio::test]
    async fn test_recommend_rejects_blank_basics() {
        let (status, body) = send(post_json(
            "/api/v1/recommendations",
            json!({"interests": "  ", "performance": "B"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_rejects_when_only_performance_is_blank() {
        let (status, body) = send(post_json(
            "/api/v1/recommendations",
            json!({"interests": "robotics", "performance": ""}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ensure_profile_without_database_is_unavailable() {
        let (status, body) = send(post_json(
            "/api/v1/profiles/6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f",
            json!({"fullName": "Ada Lovelace"}),
        ))
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "PERSISTENCE_DISABLED");
    }

    #[tokio::test]
    async fn test_profile_routes_without_database_are_unavailable() {
        let uri = "/api/v1/profiles/6f1c2d3e-4b5a-4c6d-8e7f-9a0b1c2d3e4f";
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "PERSISTENCE_DISABLED");

        let request = Request::builder()
            .uri(format!("{uri}/recommendations?type=academic"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_profile_route_rejects_malformed_user_id() {
        let request = Request::builder()
            .uri("/api/v1/profiles/not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
