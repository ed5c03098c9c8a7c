//! Shared test harness: builds the production router over an in-memory
//! SQLite database and provides small HTTP helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tutormatch_api::auth::wizard_token::WizardTokenConfig;
use tutormatch_api::config::ServerConfig;
use tutormatch_api::router::build_app_router;
use tutormatch_api::state::AppState;
use tutormatch_db::DbPool;

/// Build a test `ServerConfig` with safe defaults and a fixed token secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_path: ":memory:".into(),
        wizard: WizardTokenConfig {
            secret: "test-secret".to_string(),
            ttl_mins: 30,
        },
    }
}

/// Build the full application router over a freshly bootstrapped in-memory
/// database, returning the router and the pool for direct assertions.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub async fn build_test_app() -> (Router, DbPool) {
    let pool = tutormatch_db::create_memory_pool()
        .await
        .expect("in-memory pool");
    tutormatch_db::bootstrap::run(&pool)
        .await
        .expect("bootstrap should succeed");

    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), pool)
}

/// Perform a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Perform a POST request with a JSON body against the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
