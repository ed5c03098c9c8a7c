//! HTTP-level integration tests for login and the profile view.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, post_json};

/// Register "ana1" through the full wizard.
async fn register_ana(app: Router) {
    let body = serde_json::json!({
        "name": "Ana",
        "email": "ana1@x.com",
        "username": "ana1",
        "password": "pw1",
    });
    let response = post_json(app.clone(), "/class", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let class_json = body_json(response).await;

    let body = serde_json::json!({
        "state_token": class_json["state_token"],
        "course_id": 2,
        "time_slot": "Mon 3pm",
    });
    let response = post_json(app.clone(), "/quiz", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let quiz_json = body_json(response).await;

    let body = serde_json::json!({
        "state_token": quiz_json["state_token"],
        "selected_tutor_id": 5,
    });
    let response = post_json(app, "/final", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_form_descriptor() {
    let (app, _pool) = common::build_test_app().await;

    let response = get(app, "/login").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let fields = json["required_fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
}

/// Registering and logging in with the same credentials returns the joined
/// profile, with the password hash never serialized.
#[tokio::test]
async fn test_login_returns_joined_profile() {
    let (app, _pool) = common::build_test_app().await;
    register_ana(app.clone()).await;

    let body = serde_json::json!({ "username": "ana1", "password": "pw1" });
    let response = post_json(app, "/view_profile", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile = body_json(response).await;
    assert_eq!(profile["username"], "ana1");
    assert_eq!(profile["name"], "Ana");
    assert_eq!(profile["course_name"], "Physics");
    assert_eq!(profile["tutor_name"], "Emma Wright");
    assert_eq!(profile["time_slot"], "Mon 3pm");
    assert!(profile.get("password_hash").is_none());
}

/// Unknown-user and wrong-password logins are indistinguishable: same
/// status, same body.
#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (app, _pool) = common::build_test_app().await;
    register_ana(app.clone()).await;

    let body = serde_json::json!({ "username": "ana1", "password": "wrong" });
    let wrong_password = post_json(app.clone(), "/view_profile", body).await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let body = serde_json::json!({ "username": "ghost", "password": "pw1" });
    let unknown_user = post_json(app, "/view_profile", body).await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = body_json(unknown_user).await;

    assert_eq!(wrong_password, unknown_user);
}
