#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use storefront::router::init_router;
use storefront::state::AppState;
use storefront_config::{CorsConfig, DatabaseConfig, JwtConfig};

pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        token_expiry: 86_400,
    }
}

pub fn test_app(pool: PgPool) -> Router {
    init_router(AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::default(),
    })
}

/// App backed by a pool that never connects. Only usable for requests that
/// are answered before any query runs.
pub fn offline_app() -> Router {
    let config = DatabaseConfig {
        url: "postgres://storefront@127.0.0.1:1/storefront".to_string(),
        max_connections: 1,
        timeout: Duration::from_millis(200),
    };
    test_app(storefront_db::connect_lazy(&config).unwrap())
}

pub fn unique_username() -> String {
    format!("user_{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub struct TestAccount {
    pub id: Uuid,
    pub username: String,
    pub token: String,
}

pub async fn register(app: &Router, username: &str) -> TestAccount {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/auth/register",
            None,
            Some(json!({
                "username": username,
                "password": "correct-horse-battery",
                "email": format!("{username}@example.com"),
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

    TestAccount {
        id: body["user"]["id"].as_str().unwrap().parse().unwrap(),
        username: username.to_string(),
        token: body["token"].as_str().unwrap().to_string(),
    }
}

pub async fn create_store(app: &Router, account: &TestAccount, name: &str) -> Value {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/stores",
            Some(&account.token),
            Some(json!({ "name": name, "tags": ["test"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create store failed: {body}");
    body
}

pub async fn create_product(
    app: &Router,
    account: &TestAccount,
    store_id: &str,
    body: Value,
) -> Value {
    let (status, body) = send(
        app,
        request(
            "POST",
            &format!("/stores/{store_id}/products"),
            Some(&account.token),
            Some(body),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create product failed: {body}");
    body
}
