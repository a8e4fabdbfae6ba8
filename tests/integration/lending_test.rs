//! Integration tests for borrow requests and owner decisions.

mod helpers;

use http::StatusCode;
use serde_json::Value;

use campus_core::config::ApprovalPolicy;

fn assert_loan_invariant(resource: &Value) {
    match resource["status"].as_str() {
        Some("available") => assert!(resource["borrower_id"].is_null()),
        Some("on loan") => assert!(!resource["borrower_id"].is_null()),
        other => panic!("unexpected status {other:?}"),
    }
}

async fn listing(app: &helpers::TestApp, resource_id: &str) -> Value {
    let response = app.request("GET", "/api/resources", None).await;
    response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == resource_id)
        .cloned()
        .unwrap()
}

#[tokio::test]
async fn test_request_then_approve() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notes_id = notes["id"].as_str().unwrap();

    let notification_id = app.request_resource(notes_id, &bob).await;

    let before = listing(&app, notes_id).await;
    assert_eq!(before["status"], "available");
    assert_eq!(before["pending_requests"], 1);
    assert_loan_invariant(&before);

    let inbox = app
        .request("GET", &format!("/api/users/{alice}/notifications"), None)
        .await;
    assert_eq!(inbox.status, StatusCode::OK);
    assert_eq!(inbox.data()[0]["id"], notification_id.as_str());
    assert_eq!(inbox.data()[0]["status"], "pending");
    assert_eq!(inbox.data()[0]["requester_name"], "Bob");
    assert_eq!(inbox.data()[0]["resource_name"], "Calculus Notes");

    let response = app.respond(&notification_id, "approved").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["notification"]["status"], "approved");
    assert_eq!(response.data()["resource"]["status"], "on loan");
    assert_eq!(response.data()["resource"]["borrower_id"], bob.as_str());

    let after = listing(&app, notes_id).await;
    assert_eq!(after["status"], "on loan");
    assert_eq!(after["borrower_name"], "Bob");
    assert_eq!(after["pending_requests"], 0);
    assert_loan_invariant(&after);
}

#[tokio::test]
async fn test_request_then_deny() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notes_id = notes["id"].as_str().unwrap();

    let notification_id = app.request_resource(notes_id, &bob).await;
    let response = app.respond(&notification_id, "denied").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["notification"]["status"], "denied");

    let after = listing(&app, notes_id).await;
    assert_eq!(after["status"], "available");
    assert!(after["borrower_id"].is_null());
    assert_loan_invariant(&after);
}

#[tokio::test]
async fn test_request_on_loan_resource_is_state_error() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let carol = app.register("Carol").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notes_id = notes["id"].as_str().unwrap();

    let notification_id = app.request_resource(notes_id, &bob).await;
    app.respond(&notification_id, "approved").await;

    let response = app
        .request(
            "POST",
            &format!("/api/resources/{notes_id}/request"),
            Some(serde_json::json!({ "requester_id": carol })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "STATE");

    let inbox = app
        .request("GET", &format!("/api/users/{alice}/notifications"), None)
        .await;
    assert_eq!(inbox.data().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_second_approval_is_not_found() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notification_id = app
        .request_resource(notes["id"].as_str().unwrap(), &bob)
        .await;

    let first = app.respond(&notification_id, "approved").await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.respond(&notification_id, "approved").await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_respond_validation() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notification_id = app
        .request_resource(notes["id"].as_str().unwrap(), &bob)
        .await;

    let unknown_action = app.respond(&notification_id, "maybe").await;
    assert_eq!(unknown_action.status, StatusCode::BAD_REQUEST);

    let bad_id = app.respond("not-a-uuid", "approved").await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);

    let unknown_id = app
        .respond("6a1f6c4e-3f0b-4a57-9d0e-2b7f3d1c9a10", "approved")
        .await;
    assert_eq!(unknown_id.status, StatusCode::NOT_FOUND);

    // The pending request survived the bad attempts.
    let count = app
        .request(
            "GET",
            &format!("/api/users/{alice}/notifications/pending-count"),
            None,
        )
        .await;
    assert_eq!(count.data()["count"], 1);
}

#[tokio::test]
async fn test_request_preconditions() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notes_id = notes["id"].as_str().unwrap();

    let own = app
        .request(
            "POST",
            &format!("/api/resources/{notes_id}/request"),
            Some(serde_json::json!({ "requester_id": alice })),
        )
        .await;
    assert_eq!(own.status, StatusCode::BAD_REQUEST);
    assert_eq!(own.error_code(), "VALIDATION");

    let missing_resource = app
        .request(
            "POST",
            "/api/resources/6a1f6c4e-3f0b-4a57-9d0e-2b7f3d1c9a10/request",
            Some(serde_json::json!({ "requester_id": alice })),
        )
        .await;
    assert_eq!(missing_resource.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_resource.error_code(), "STATE");

    let missing_body = app
        .request("POST", &format!("/api/resources/{notes_id}/request"), None)
        .await;
    assert_eq!(missing_body.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_last_writer_wins_replaces_borrower() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let carol = app.register("Carol").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notes_id = notes["id"].as_str().unwrap();

    let from_bob = app.request_resource(notes_id, &bob).await;
    let from_carol = app.request_resource(notes_id, &carol).await;

    let pending = app
        .request("GET", &format!("/api/resources/{notes_id}/requests"), None)
        .await;
    assert_eq!(pending.data().as_array().unwrap().len(), 2);

    app.respond(&from_bob, "approved").await;
    let response = app.respond(&from_carol, "approved").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["displaced_borrower"], bob.as_str());
    assert_eq!(response.data()["resource"]["borrower_id"], carol.as_str());
    assert_loan_invariant(&response.data()["resource"]);
}

#[tokio::test]
async fn test_reject_if_on_loan_keeps_borrower() {
    let app = helpers::TestApp::with_policy(ApprovalPolicy::RejectIfOnLoan).await;
    let alice = app.register("Alice").await;
    let bob = app.register("Bob").await;
    let carol = app.register("Carol").await;
    let notes = app.upload_pdf(&alice, "Calculus Notes").await;
    let notes_id = notes["id"].as_str().unwrap();

    let from_bob = app.request_resource(notes_id, &bob).await;
    let from_carol = app.request_resource(notes_id, &carol).await;
    app.respond(&from_bob, "approved").await;

    let response = app.respond(&from_carol, "approved").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "STATE");

    let after = listing(&app, notes_id).await;
    assert_eq!(after["borrower_id"], bob.as_str());
    assert_eq!(after["pending_requests"], 1);

    let denied = app.respond(&from_carol, "denied").await;
    assert_eq!(denied.status, StatusCode::OK);
}
