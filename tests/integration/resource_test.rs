//! Integration tests for the resource catalog and file pass-through.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_upload_and_list() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;

    let resource = app.upload_pdf(&alice, "Calculus Notes").await;
    assert_eq!(resource["name"], "Calculus Notes");
    assert_eq!(resource["status"], "available");
    assert!(resource["borrower_id"].is_null());
    assert_eq!(resource["original_filename"], "notes.pdf");
    let stored = resource["stored_file"].as_str().unwrap();
    assert!(stored.ends_with(".pdf"));
    assert_ne!(stored, "notes.pdf");

    let response = app.request("GET", "/api/resources", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let listings = response.data().as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["owner_name"], "Alice");
    assert!(listings[0]["borrower_name"].is_null());
    assert_eq!(listings[0]["pending_requests"], 0);
    assert_eq!(app.upload_count(), 1);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_extension() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;

    let response = app
        .upload(
            &[
                ("name", "Script"),
                ("category", "Code"),
                ("description", "Not allowed"),
                ("owner_id", alice.as_str()),
            ],
            Some(("run.exe", b"MZ".as_slice())),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION");
    assert_eq!(app.upload_count(), 0);
}

#[tokio::test]
async fn test_upload_missing_fields() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;

    let no_file = app
        .upload(
            &[
                ("name", "Calculus Notes"),
                ("category", "Notes"),
                ("description", "Lecture notes"),
                ("owner_id", alice.as_str()),
            ],
            None,
        )
        .await;
    assert_eq!(no_file.status, StatusCode::BAD_REQUEST);

    let no_name = app
        .upload(
            &[
                ("category", "Notes"),
                ("description", "Lecture notes"),
                ("owner_id", alice.as_str()),
            ],
            Some(("notes.pdf", b"%PDF".as_slice())),
        )
        .await;
    assert_eq!(no_name.status, StatusCode::BAD_REQUEST);

    let no_description = app
        .upload(
            &[
                ("name", "Calculus Notes"),
                ("category", "Notes"),
                ("owner_id", alice.as_str()),
            ],
            Some(("notes.pdf", b"%PDF".as_slice())),
        )
        .await;
    assert_eq!(no_description.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_description.error_code(), "VALIDATION");

    let bad_owner = app
        .upload(
            &[
                ("name", "Calculus Notes"),
                ("category", "Notes"),
                ("description", "Lecture notes"),
                ("owner_id", "42"),
            ],
            Some(("notes.pdf", b"%PDF".as_slice())),
        )
        .await;
    assert_eq!(bad_owner.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.upload_count(), 0);
}

#[tokio::test]
async fn test_upload_unknown_owner() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload(
            &[
                ("name", "Calculus Notes"),
                ("category", "Notes"),
                ("description", "Lecture notes"),
                ("owner_id", "6a1f6c4e-3f0b-4a57-9d0e-2b7f3d1c9a10"),
            ],
            Some(("notes.pdf", b"%PDF".as_slice())),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.upload_count(), 0);
}

#[tokio::test]
async fn test_serve_and_download() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("Alice").await;
    let resource = app.upload_pdf(&alice, "Calculus Notes").await;
    let stored = resource["stored_file"].as_str().unwrap();

    let served = app.get_raw(&format!("/uploads/{stored}")).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.body, b"%PDF-1.4 test");
    assert_eq!(served.header("content-type"), Some("application/pdf"));
    assert!(served.header("content-disposition").is_none());

    let download = app
        .get_raw(&format!("/api/resources/{stored}/download"))
        .await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.body, b"%PDF-1.4 test");
    assert_eq!(
        download.header("content-disposition"),
        Some("attachment; filename=\"notes.pdf\"")
    );
}

#[tokio::test]
async fn test_serve_missing_and_traversal() {
    let app = helpers::TestApp::new().await;

    let missing = app.get_raw("/uploads/nothing-here.pdf").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let traversal = app.get_raw("/uploads/..").await;
    assert_ne!(traversal.status, StatusCode::OK);

    let encoded = app.get_raw("/uploads/..%2Fsecret.txt").await;
    assert_eq!(encoded.status, StatusCode::BAD_REQUEST);
}
