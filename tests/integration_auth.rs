mod common;

use axum::http::StatusCode;
use cmd_admin_api::store::Collection;
use cmd_admin_api::utils::jwt::verify_token;
use common::{body_json, json_request, test_app, test_state};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn login_bootstraps_the_admin_account() {
    let state = test_state();
    let app = test_app(state.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"username": "admin", "password": "p@ssw0rd"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["code"], 1);
    assert_eq!(body["message"], "登录成功");
    assert_eq!(body["data"]["identity"], "admin");
    assert_eq!(body["data"]["username"], "admin");
    assert!(body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));

    let accounts = state.store.list_all(Collection::Users).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].str_field("username"), Some("admin"));
    assert_eq!(accounts[0].str_field("identity"), Some("admin"));
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let app = test_app(test_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"code": 0, "err": "账户密码错误"})
    );
}

#[tokio::test]
async fn login_with_email_field_is_rejected() {
    let app = test_app(test_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"email": "x@y.com", "username": "admin", "password": "p@ssw0rd"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"code": 0, "err": "账户不是管理员"})
    );
}

#[tokio::test]
async fn login_with_missing_password_is_rejected() {
    let app = test_app(test_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"username": "admin"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["err"], "password is required");
}

#[tokio::test]
async fn repeated_login_issues_a_fresh_token_each_time() {
    let state = test_state();
    let app = test_app(state.clone());

    let mut tokens = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/auth/login",
                json!({"username": "admin", "password": "p@ssw0rd"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        tokens.push(body["data"]["token"].as_str().unwrap().to_string());
    }

    assert_ne!(tokens[0], tokens[1]);

    // Distinct tokens, identical identity claim.
    let first = verify_token(&tokens[0], &state.jwt_config).unwrap();
    let second = verify_token(&tokens[1], &state.jwt_config).unwrap();
    assert_eq!(first.sub, second.sub);
    assert_eq!(first.username, second.username);
    assert_eq!(first.identity, second.identity);

    // The bootstrap ran exactly once.
    assert_eq!(state.store.list_all(Collection::Users).await.unwrap().len(), 1);
}

#[tokio::test]
async fn concurrent_first_logins_create_exactly_one_account() {
    let state = test_state();
    let app = test_app(state.clone());

    let request = || {
        json_request(
            "POST",
            "/auth/login",
            json!({"username": "admin", "password": "p@ssw0rd"}),
        )
    };

    let (first, second) = tokio::join!(
        app.clone().oneshot(request()),
        app.clone().oneshot(request())
    );

    // Both logins resolve successfully; the losing bootstrap insert falls
    // back to reading the record the winner created.
    assert_eq!(first.unwrap().status(), StatusCode::CREATED);
    assert_eq!(second.unwrap().status(), StatusCode::CREATED);

    assert_eq!(state.store.list_all(Collection::Users).await.unwrap().len(), 1);
}

#[tokio::test]
async fn register_is_accepted_but_does_nothing() {
    let state = test_state();
    let app = test_app(state.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/register",
            json!({"username": "someone", "password": "pw", "email": "a@b.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.store.list_all(Collection::Users).await.unwrap().is_empty());
}
