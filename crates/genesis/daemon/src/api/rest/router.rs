//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use crate::error::ApiError;
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    BoxError, Router,
};
use genesis_contact::CONTACT_PATH;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(
            CONTACT_PATH,
            post(handlers::submit_contact).fallback(handlers::contact_method_not_allowed),
        )
        .route("/api/health", get(handlers::health_check))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .timeout(config.request_timeout()),
        )
        .layer(TraceLayer::new_for_http());

    let router = if config.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SinkError, SinkResult};
    use crate::sink::{LoggingSink, ReceivedSubmission, SubmissionSink};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use genesis_contact::{ContactResponse, MethodNotAllowedBody, SUCCESS_MESSAGE};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tower::ServiceExt;

    /// Sink keeping every record it was handed
    #[derive(Default)]
    struct Recorder(Mutex<Vec<ReceivedSubmission>>);

    #[async_trait]
    impl SubmissionSink for Recorder {
        async fn accept(&self, record: &ReceivedSubmission) -> SinkResult<()> {
            self.0.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct Broken;

    #[async_trait]
    impl SubmissionSink for Broken {
        async fn accept(&self, _: &ReceivedSubmission) -> SinkResult<()> {
            Err(SinkError::Unavailable("mailbox offline".into()))
        }
    }

    fn test_router() -> Router {
        create_router(AppState::new(Arc::new(LoggingSink)), &ServerConfig::default())
    }

    fn valid_body() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "project": "webapp",
            "message": "Please build me an analytical engine UI"
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Body) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .header("origin", "https://genesis.example")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_returns_200() {
        let resp = send(test_router(), "POST", "/api/contact", Body::from(valid_body().to_string())).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let json: ContactResponse = serde_json::from_value(json_body(resp).await).unwrap();
        assert_eq!(json, ContactResponse::accepted(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn accepted_submission_reaches_the_sink_normalized() {
        let recorder = Arc::new(Recorder::default());
        let app = create_router(AppState::new(recorder.clone()), &ServerConfig::default());
        let mut body = valid_body();
        body["name"] = json!("  Ada Lovelace  ");

        let resp = send(app, "POST", "/api/contact", Body::from(body.to_string())).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let records = recorder.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].submission.name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn get_returns_405_regardless_of_body() {
        for body in [Body::empty(), Body::from(valid_body().to_string())] {
            let resp = send(test_router(), "GET", "/api/contact", body).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            let json: MethodNotAllowedBody = serde_json::from_value(json_body(resp).await).unwrap();
            assert_eq!(json, MethodNotAllowedBody::default());
        }
    }

    #[tokio::test]
    async fn other_methods_return_405() {
        for method in ["PUT", "DELETE", "PATCH"] {
            let resp = send(test_router(), method, "/api/contact", Body::empty()).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        }
    }

    #[tokio::test]
    async fn empty_object_returns_four_violations() {
        let resp = send(test_router(), "POST", "/api/contact", Body::from("{}")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_body(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation error");
        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 4);
        for (error, field) in errors.iter().zip(["name", "email", "project", "message"]) {
            assert_eq!(error["path"], json!([field]));
            assert_eq!(error["code"], "invalid_type");
            assert_eq!(error["message"], "Required");
        }
    }

    #[tokio::test]
    async fn empty_body_is_treated_as_empty_object() {
        let resp = send(test_router(), "POST", "/api/contact", Body::empty()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = json_body(resp).await;
        assert_eq!(json["errors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let resp = send(test_router(), "POST", "/api/contact", Body::from("{\"name\": ")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_body(resp).await;
        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"], json!([]));
        assert_eq!(errors[0]["code"], "invalid_json");
    }

    #[tokio::test]
    async fn field_rules_apply_on_the_server() {
        let mut body = valid_body();
        body["email"] = json!("not-an-email");
        body["message"] = json!("short");

        let resp = send(test_router(), "POST", "/api/contact", Body::from(body.to_string())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = json_body(resp).await;
        let paths: Vec<_> = json["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"][0].as_str().unwrap().to_string())
            .collect();
        assert_eq!(paths, vec!["email", "message"]);
    }

    #[tokio::test]
    async fn sink_failure_returns_500() {
        let app = create_router(AppState::new(Arc::new(Broken)), &ServerConfig::default());
        let resp = send(app, "POST", "/api/contact", Body::from(valid_body().to_string())).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: ContactResponse = serde_json::from_value(json_body(resp).await).unwrap();
        assert_eq!(json, ContactResponse::internal_error());
    }

    #[tokio::test]
    async fn cors_can_be_disabled() {
        let config = ServerConfig {
            enable_cors: false,
            ..ServerConfig::default()
        };
        let app = create_router(AppState::new(Arc::new(LoggingSink)), &config);
        let resp = send(app, "POST", "/api/contact", Body::from(valid_body().to_string())).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn health_reports_version() {
        let resp = send(test_router(), "GET", "/api/health", Body::empty()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn oversized_body_returns_400_json() {
        let recorder = Arc::new(Recorder::default());
        let app = create_router(AppState::new(recorder.clone()), &ServerConfig::default());
        let mut body = valid_body();
        body["message"] = json!("x".repeat(70 * 1024));

        let resp = send(app, "POST", "/api/contact", Body::from(body.to_string())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");

        let json = json_body(resp).await;
        assert_eq!(json["success"], false);
        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"], json!([]));
        assert_eq!(errors[0]["code"], "too_big");
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn timed_out_request_returns_json_and_is_not_recorded() {
        let recorder = Arc::new(Recorder::default());
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let state = AppState::new(recorder.clone()).with_ack_delay(Duration::from_millis(1500));
        let app = create_router(state, &config);

        let resp = send(app, "POST", "/api/contact", Body::from(valid_body().to_string())).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");

        let json: ContactResponse = serde_json::from_value(json_body(resp).await).unwrap();
        assert_eq!(json, ContactResponse::internal_error());
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn preflight_is_answered_by_cors() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/contact")
                    .header("origin", "https://genesis.example")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn options_without_cors_returns_405() {
        let config = ServerConfig {
            enable_cors: false,
            ..ServerConfig::default()
        };
        let app = create_router(AppState::new(Arc::new(LoggingSink)), &config);
        let resp = send(app, "OPTIONS", "/api/contact", Body::empty()).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json: MethodNotAllowedBody = serde_json::from_value(json_body(resp).await).unwrap();
        assert_eq!(json, MethodNotAllowedBody::default());
    }
}
