//! End-to-end workflow against mock storage and listing servers

mod common;

use common::{RecordingProgress, filled_store, image};
use estate_lister::config::Config;
use estate_lister::listing::HttpListingService;
use estate_lister::session::ListingEditor;
use estate_lister::submit::SubmitOutcome;
use estate_lister::types::ListingRoute;
use estate_lister::upload::CloudinaryUploader;
use mockito::Matcher;
use serde_json::json;

fn config(server: &mockito::Server) -> Config {
    Config {
        upload_url: format!("{}/image/upload", server.url()),
        upload_preset: "estate-preset".to_string(),
        api_base_url: server.url(),
        timeout_secs: 5,
        user_id: None,
    }
}

async fn upload_mock(server: &mut mockito::Server, file: &str) -> mockito::Mock {
    server
        .mock("POST", "/image/upload")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(format!("filename=\"{file}\"")),
            Matcher::Regex("estate-preset".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "secure_url": format!("https://cdn.test/{file}") }).to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_upload_and_publish() {
    let mut server = mockito::Server::new_async().await;
    let front = upload_mock(&mut server, "front.jpg").await;
    let back = upload_mock(&mut server, "back.jpg").await;
    let create = server
        .mock("POST", "/api/listing/create")
        .match_body(Matcher::PartialJson(json!({
            "imageUrls": ["https://cdn.test/front.jpg", "https://cdn.test/back.jpg"],
            "userRef": "user-99",
            "type": "sale",
            "parking": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"_id":"abc123"}"#)
        .create_async()
        .await;

    let config = config(&server);
    let uploader = CloudinaryUploader::from_config(&config).unwrap();
    let listings = HttpListingService::from_config(&config).unwrap();
    let progress = RecordingProgress::new();
    let mut editor =
        ListingEditor::with_store(filled_store(), &uploader, &listings, "user-99", &progress);

    assert!(editor.upload_images(&[image("front.jpg"), image("back.jpg")]).await);
    let outcome = editor.submit().await;

    assert_eq!(outcome, SubmitOutcome::Created(ListingRoute::new("abc123")));
    assert_eq!(progress.navigations(), vec!["/listing/abc123".to_string()]);
    front.assert_async().await;
    back.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_storage_failure_keeps_draft_and_skips_backend() {
    let mut server = mockito::Server::new_async().await;
    upload_mock(&mut server, "front.jpg").await;
    server
        .mock("POST", "/image/upload")
        .match_body(Matcher::Regex("filename=\"broken.jpg\"".to_string()))
        .with_status(500)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/listing/create")
        .expect(0)
        .create_async()
        .await;

    let config = config(&server);
    let uploader = CloudinaryUploader::from_config(&config).unwrap();
    let listings = HttpListingService::from_config(&config).unwrap();
    let progress = RecordingProgress::new();
    let mut editor =
        ListingEditor::with_store(filled_store(), &uploader, &listings, "user-99", &progress);

    assert!(!editor.upload_images(&[image("front.jpg"), image("broken.jpg")]).await);
    assert!(editor.draft().image_urls.is_empty());
    assert_eq!(
        editor.upload_error(),
        Some("Image upload failed. Please try again.")
    );

    let outcome = editor.submit().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Invalid("You must upload at least one image".to_string())
    );
    create.assert_async().await;
}
