//! Integration tests for the per-user dashboard.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_empty_dashboard() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;

    let response = app
        .request("GET", &format!("/api/users/{alice}/dashboard"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["owned_items"], serde_json::json!([]));
    assert_eq!(response.data()["borrowed_items"], serde_json::json!([]));
}

#[tokio::test]
async fn test_owned_and_borrowed_items() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    app.upload_pdf(&alice, "Physics Lab").await;

    let notification_id = app
        .request_resource(notes["id"].as_str().unwrap(), &bob)
        .await;
    app.respond(&notification_id, "approved").await;

    let owner = app
        .request("GET", &format!("/api/users/{alice}/dashboard"), None)
        .await;
    let owned = owner.data()["owned_items"].as_array().unwrap();
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0]["name"], "Calculus Notes");
    assert_eq!(owned[0]["borrower_name"], "Bob");
    assert!(owned[1]["borrower_name"].is_null());
    assert_eq!(owner.data()["borrowed_items"], serde_json::json!([]));

    let borrower = app
        .request("GET", &format!("/api/users/{bob}/dashboard"), None)
        .await;
    let borrowed = borrower.data()["borrowed_items"].as_array().unwrap();
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0]["name"], "Calculus Notes");
    assert_eq!(borrowed[0]["owner_name"], "Alice");
    assert_eq!(borrowed[0]["status"], "on loan");
    assert_eq!(borrower.data()["owned_items"], serde_json::json!([]));
}

#[tokio::test]
async fn test_dashboard_invalid_user_id() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/users/42/dashboard", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
