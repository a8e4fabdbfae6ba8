//! Integration tests for registration and login.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_returns_summary() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Alice",
                "email": "  Alice@X.edu ",
                "password": "password123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["name"], "Alice");
    assert_eq!(response.data()["email"], "alice@x.edu");
    assert!(response.data().get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = helpers::TestApp::new().await;
    app.register("Alice").await;

    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Another Alice",
                "email": "ALICE@x.edu",
                "password": "password456",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");

    // The first account still logs in with its own password.
    let login = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "alice@x.edu",
                "password": "password123",
            })),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.data()["name"], "Alice");
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new().await;

    let missing = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({ "name": "Alice" })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error_code(), "VALIDATION");

    let bad_email = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Alice",
                "email": "not-an-email",
                "password": "password123",
            })),
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let short_password = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "name": "Alice",
                "email": "alice@x.edu",
                "password": "short",
            })),
        )
        .await;
    assert_eq!(short_password.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "alice@x.edu",
                "password": "password123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], alice.as_str());
    assert_eq!(response.data()["email"], "alice@x.edu");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register("Alice").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "alice@x.edu",
                "password": "wrongpassword",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "AUTHENTICATION");
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "email": "nobody@x.edu",
                "password": "password123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["storage"], true);
    assert_eq!(response.data()["database"], "memory");
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let app = helpers::TestApp::with_unreachable_database().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "degraded");
    assert_eq!(response.data()["database"], "unreachable");
    assert_eq!(response.data()["storage"], true);
}
