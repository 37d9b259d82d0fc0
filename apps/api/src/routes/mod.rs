pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::salary::handlers::handle_salary_estimate;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/salary", post(handle_salary_estimate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::{GenerateText, LlmError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Returns the same text on every attempt, or fails every attempt.
    struct FixedLlm {
        output: Option<String>,
    }

    #[async_trait]
    impl GenerateText for FixedLlm {
        async fn generate(
            &self,
            _model: &str,
            _prompt: &str,
            _search_enabled: bool,
        ) -> Result<String, LlmError> {
            match &self.output {
                Some(text) => Ok(text.clone()),
                None => Err(LlmError::Api {
                    status: 503,
                    message: "backend offline".to_string(),
                }),
            }
        }
    }

    fn test_app(api_key: Option<&str>, output: Option<&str>) -> Router {
        let state = AppState {
            config: Config {
                gemini_api_key: api_key.map(str::to_string),
                port: 5000,
                rust_log: "info".to_string(),
            },
            llm: Arc::new(FixedLlm {
                output: output.map(str::to_string),
            }),
        };
        build_router(state)
    }

    async fn send_json(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    fn valid_payload() -> Value {
        json!({
            "company": "Acme",
            "position": "SDE-2",
            "ctc": "24 LPA",
            "location": "Bengaluru"
        })
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send_json(
            test_app(Some("key"), None),
            Method::GET,
            "/health",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "message": "Server is running"}));
    }

    #[tokio::test]
    async fn test_salary_missing_field_is_400_naming_the_field() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("position");
        let (status, body) = send_json(
            test_app(Some("key"), None),
            Method::POST,
            "/api/salary",
            Some(payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "position is required"}));
    }

    #[tokio::test]
    async fn test_salary_without_api_key_is_config_error() {
        let (status, body) = send_json(
            test_app(None, Some(r#"{"status":"success"}"#)),
            Method::POST,
            "/api/salary",
            Some(valid_payload()),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Server configuration error: API key not found"})
        );
    }

    #[tokio::test]
    async fn test_salary_validation_precedes_config_check() {
        let (status, body) = send_json(
            test_app(None, None),
            Method::POST,
            "/api/salary",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "company is required"}));
    }

    #[tokio::test]
    async fn test_salary_success_passes_breakdown_through() {
        let output = r#"{"status":"success","research_findings":{"market_range":"20-28 LPA"},"monthly_breakdown":{"in_hand":152000},"notes":["cash only"]}"#;
        let (status, body) = send_json(
            test_app(Some("key"), Some(output)),
            Method::POST,
            "/api/salary",
            Some(valid_payload()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["status"], json!("success"));
        assert_eq!(body["company"], json!("Acme"));
        assert_eq!(body["monthly_breakdown"], json!({"in_hand": 152000}));
        assert_eq!(body["analysis"], Value::Null);
    }

    #[tokio::test]
    async fn test_salary_mismatch_is_200_with_success_false() {
        let output = r#"{"status":"mismatch","analysis":"CTC above any credible band"}"#;
        let (status, body) = send_json(
            test_app(Some("key"), Some(output)),
            Method::POST,
            "/api/salary",
            Some(valid_payload()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["status"], json!("mismatch"));
        assert_eq!(body["analysis"], json!("CTC above any credible band"));
        assert_eq!(body["monthly_breakdown"], Value::Null);
    }

    #[tokio::test]
    async fn test_salary_exhausted_cascade_is_500_with_last_error() {
        let (status, body) = send_json(
            test_app(Some("key"), None),
            Method::POST,
            "/api/salary",
            Some(valid_payload()),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Failed to fetch salary estimate:"));
        assert!(message.contains("backend offline"));
    }
}
