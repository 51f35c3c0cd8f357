use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use cmd_admin_api::config::admin::AdminConfig;
use cmd_admin_api::config::jwt::JwtConfig;
use cmd_admin_api::router::init_router;
use cmd_admin_api::state::AppState;
use cmd_admin_api::store::memory::InMemoryStore;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

/// Application state over a fresh in-memory store.
pub fn test_state() -> AppState {
    AppState {
        store: Arc::new(InMemoryStore::new()),
        jwt_config: JwtConfig {
            secret: TEST_SECRET.to_string(),
            token_expiry: 172_800,
        },
        admin_config: AdminConfig {
            username: "admin".to_string(),
            password: "p@ssw0rd".to_string(),
        },
    }
}

pub fn test_app(state: AppState) -> Router {
    init_router(state)
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn bearer_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Logs in with the default admin pair and returns the issued token.
#[allow(dead_code)]
pub async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({"username": "admin", "password": "p@ssw0rd"}),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    body["data"]["token"].as_str().unwrap().to_string()
}
