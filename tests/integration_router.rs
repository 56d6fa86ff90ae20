//! Router behaviour that is decided before any query runs: authentication,
//! input parsing, CORS and the ambient endpoints.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use storefront::storefront_auth::{Claims, issue_token};
use tower::ServiceExt;
use uuid::Uuid;

use common::{TEST_JWT_SECRET, offline_app, request, send, test_jwt_config};

const PROTECTED_ROUTES: &[(&str, &str)] = &[
    ("GET", "/my-store"),
    ("POST", "/stores"),
    ("PUT", "/stores/6f1c2a9e-2b1f-4a57-9a43-0d5b2f0c8e11"),
    ("DELETE", "/stores/6f1c2a9e-2b1f-4a57-9a43-0d5b2f0c8e11"),
    ("POST", "/stores/6f1c2a9e-2b1f-4a57-9a43-0d5b2f0c8e11/products"),
    ("PUT", "/products/6f1c2a9e-2b1f-4a57-9a43-0d5b2f0c8e11"),
    ("DELETE", "/products/6f1c2a9e-2b1f-4a57-9a43-0d5b2f0c8e11"),
];

fn valid_token() -> String {
    issue_token(Uuid::new_v4(), "ada", &test_jwt_config()).unwrap()
}

fn signed(claims: &Claims, algorithm: Algorithm, secret: &str) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn assert_rejected_everywhere(authorization: Option<&str>) {
    let app = offline_app();

    for (method, uri) in PROTECTED_ROUTES {
        let mut builder = Request::builder()
            .method(*method)
            .uri(*uri)
            .header("content-type", "application/json");
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        let req = builder.body(Body::from(json!({"name": "x"}).to_string())).unwrap();

        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["status"], 401, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&offline_app(), request("GET", "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (status, body) = send(
        &offline_app(),
        request("GET", "/api-docs/openapi.json", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/auth/register",
        "/auth/login",
        "/stores",
        "/stores/{id}",
        "/my-store",
        "/stores/{id}/products",
        "/products/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn test_missing_authorization_header() {
    assert_rejected_everywhere(None).await;

    let (_, body) = send(&offline_app(), request("GET", "/my-store", None, None)).await;
    assert_eq!(body["message"], "Authorization header required");
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    assert_rejected_everywhere(Some("Token abc")).await;
    assert_rejected_everywhere(Some("Bearer")).await;

    let req = Request::builder()
        .uri("/my-store")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let (_, body) = send(&offline_app(), req).await;
    assert_eq!(
        body["message"],
        "Invalid authorization format, expected 'Bearer {token}'"
    );
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let now = Utc::now().timestamp() as usize;
    let token = signed(
        &Claims {
            sub: Uuid::new_v4().to_string(),
            username: "ada".to_string(),
            exp: now - 7_200,
            iat: now - 93_600,
        },
        Algorithm::HS256,
        TEST_JWT_SECRET,
    );

    assert_rejected_everywhere(Some(&format!("Bearer {token}"))).await;
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let token = valid_token();
    let other = issue_token(Uuid::new_v4(), "mallory", &test_jwt_config()).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert_rejected_everywhere(Some(&format!("Bearer {forged}"))).await;
}

#[tokio::test]
async fn test_other_algorithm_and_secret_rejected() {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "ada".to_string(),
        exp: now + 3_600,
        iat: now,
    };

    let hs512 = signed(&claims, Algorithm::HS512, TEST_JWT_SECRET);
    assert_rejected_everywhere(Some(&format!("Bearer {hs512}"))).await;

    let foreign = signed(&claims, Algorithm::HS256, "some-other-secret-of-decent-length");
    assert_rejected_everywhere(Some(&format!("Bearer {foreign}"))).await;
}

#[tokio::test]
async fn test_non_uuid_subject_rejected() {
    let now = Utc::now().timestamp() as usize;
    let token = signed(
        &Claims {
            sub: "not-a-uuid".to_string(),
            username: "ada".to_string(),
            exp: now + 3_600,
            iat: now,
        },
        Algorithm::HS256,
        TEST_JWT_SECRET,
    );

    assert_rejected_everywhere(Some(&format!("Bearer {token}"))).await;
}

#[tokio::test]
async fn test_invalid_ids_are_bad_requests() {
    let app = offline_app();
    let token = valid_token();

    let cases = [
        ("GET", "/stores/not-a-uuid", None, "Invalid store ID"),
        ("GET", "/stores/not-a-uuid/products", None, "Invalid store ID"),
        ("GET", "/products/123", None, "Invalid product ID"),
        ("PUT", "/stores/not-a-uuid", Some(json!({})), "Invalid store ID"),
        ("DELETE", "/stores/not-a-uuid", None, "Invalid store ID"),
        (
            "POST",
            "/stores/not-a-uuid/products",
            Some(json!({"name": "Bread"})),
            "Invalid store ID",
        ),
        ("PUT", "/products/not-a-uuid", Some(json!({})), "Invalid product ID"),
        ("DELETE", "/products/not-a-uuid", None, "Invalid product ID"),
    ];

    for (method, uri, body, message) in cases {
        let (status, response) = send(&app, request(method, uri, Some(&token), body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(response["message"], message, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_public_reads_ignore_a_bad_token() {
    // An unusable token on a public route degrades to anonymous, so the
    // request still reaches ID parsing instead of failing with 401.
    let (status, body) = send(
        &offline_app(),
        request("GET", "/products/123", Some("garbage"), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product ID");
}

#[tokio::test]
async fn test_malformed_register_body() {
    let app = offline_app();

    let req = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/register",
            None,
            Some(json!({"username": "ada", "email": "ada@example.com"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password is required");
}

#[tokio::test]
async fn test_register_validation_failures() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/register",
            None,
            Some(json!({"username": "ada", "password": "short", "email": "ada@example.com"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "password must be at least 8 characters");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/auth/register",
            None,
            Some(json!({"username": "ada", "password": "long-enough", "email": "nope"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "email must be a valid email address");
}

#[tokio::test]
async fn test_login_requires_json_content_type() {
    let req = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .body(Body::from(r#"{"username":"ada","password":"x"}"#))
        .unwrap();

    let (status, body) = send(&offline_app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing 'Content-Type: application/json' header"
    );
}

#[tokio::test]
async fn test_create_product_rejects_negative_price() {
    let (status, body) = send(
        &offline_app(),
        request(
            "POST",
            "/stores/6f1c2a9e-2b1f-4a57-9a43-0d5b2f0c8e11/products",
            Some(&valid_token()),
            Some(json!({"name": "Bread", "price": -2.5})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "price must not be negative");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/stores")
        .header("origin", "https://shop.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "authorization,content-type")
        .body(Body::empty())
        .unwrap();

    let response = offline_app().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}
