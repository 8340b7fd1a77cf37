//! Upload API integration tests.
//!
//! Run with: `cargo test -p mediarelay-api --test uploads_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_failing_app, setup_recording_app, setup_test_app, setup_test_app_with_limit};
use regex::Regex;

fn wav_part(data: &[u8]) -> Part {
    Part::bytes(bytes::Bytes::from(data.to_vec()))
        .file_name("clip.wav")
        .mime_type("audio/wav")
}

fn mp4_part(data: &[u8]) -> Part {
    Part::bytes(bytes::Bytes::from(data.to_vec()))
        .file_name("take.mp4")
        .mime_type("video/mp4")
}

#[tokio::test]
async fn test_service_status() {
    let app = setup_test_app().await;

    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "R2 upload service running");
    assert_eq!(
        body["endpoints"],
        serde_json::json!(["POST /upload-audio", "POST /upload-video"])
    );
}

#[tokio::test]
async fn test_upload_audio() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part("audio", wav_part(b"riff-data!"));
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["size"], 10);
    assert_eq!(body["url"], body["audio_url"]);

    let filename = body["filename"].as_str().expect("filename in response");
    let pattern = Regex::new(r"^audio/\d+-[a-z0-9]{5}\.wav$").unwrap();
    assert!(pattern.is_match(filename), "unexpected filename: {}", filename);

    let url = body["url"].as_str().expect("url in response");
    assert_eq!(url, format!("http://localhost:3000/media/{}", filename));

    // probe binary does not exist in tests; the upload still succeeds,
    // with duration absent rather than null
    assert!(body.get("duration").is_none());

    let stored = std::fs::read(app.stored_path(filename)).expect("stored object on disk");
    assert_eq!(stored, b"riff-data!");

    assert_eq!(app.spool_file_count(), 0, "spool file was not released");
}

#[tokio::test]
async fn test_upload_video() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part("video", mp4_part(b"mp4-box-data"));
    let response = app.client().post("/upload-video").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["size"], 12);
    assert!(body.get("audio_url").is_none());
    assert!(body.get("duration").is_none());

    let filename = body["filename"].as_str().expect("filename in response");
    let pattern = Regex::new(r"^video/\d+-[a-z0-9]{5}\.mp4$").unwrap();
    assert!(pattern.is_match(filename), "unexpected filename: {}", filename);

    let stored = std::fs::read(app.stored_path(filename)).expect("stored object on disk");
    assert_eq!(stored, b"mp4-box-data");

    // video is never spooled to disk
    assert_eq!(app.spool_file_count(), 0);
}

#[tokio::test]
async fn test_upload_audio_missing_field() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_text("note", "no file here");
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No audio file uploaded");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_upload_video_wrong_field_name() {
    let app = setup_test_app().await;

    // the file arrives under "audio", so the video route must treat it as missing
    let form = MultipartForm::new().add_part("audio", mp4_part(b"mp4-box-data"));
    let response = app.client().post("/upload-video").multipart(form).await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No video file uploaded");
}

#[tokio::test]
async fn test_upload_failure_returns_500() {
    let app = setup_failing_app().await;

    let form = MultipartForm::new().add_part("audio", wav_part(b"riff-data!"));
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Upload failed");
    assert!(body["details"]
        .as_str()
        .expect("details in response")
        .contains("simulated bucket outage"));

    // spool file released on the failure path too
    assert_eq!(app.spool_file_count(), 0);
}

#[tokio::test]
async fn test_default_extension_applied() {
    let app = setup_test_app().await;

    let part = Part::bytes(bytes::Bytes::from(b"opaque".to_vec()))
        .file_name("voice-note")
        .mime_type("audio/mpeg");
    let form = MultipartForm::new().add_part("audio", part);
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    let filename = body["filename"].as_str().expect("filename in response");
    assert!(
        filename.ends_with(".mp3"),
        "expected default extension, got: {}",
        filename
    );
}

#[tokio::test]
async fn test_empty_file_accepted() {
    let app = setup_test_app().await;

    let form = MultipartForm::new().add_part("audio", wav_part(b""));
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["size"], 0);

    let filename = body["filename"].as_str().expect("filename in response");
    let stored = std::fs::read(app.stored_path(filename)).expect("stored object on disk");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_uploads_get_distinct_keys() {
    let app = setup_test_app().await;

    let mut filenames = Vec::new();
    for _ in 0..2 {
        let form = MultipartForm::new().add_part("audio", wav_part(b"riff-data!"));
        let response = app.client().post("/upload-audio").multipart(form).await;
        assert_eq!(response.status_code(), 200);
        let body: serde_json::Value = response.json();
        filenames.push(body["filename"].as_str().expect("filename").to_string());
    }

    assert_ne!(filenames[0], filenames[1]);
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let app = setup_test_app_with_limit(1024).await;

    // The limit layer rejects on Content-Length, before the handler runs.
    let form = MultipartForm::new().add_part("audio", wav_part(&vec![0u8; 4096]));
    let response = app
        .client()
        .post("/upload-audio")
        .add_header("Content-Length", "4096")
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 413);
    assert_eq!(app.spool_file_count(), 0);
}

#[tokio::test]
async fn test_declared_content_type_forwarded() {
    let (app, recorder) = setup_recording_app().await;

    let part = Part::bytes(bytes::Bytes::from(b"flac-data".to_vec()))
        .file_name("clip.flac")
        .mime_type("audio/flac");
    let form = MultipartForm::new().add_part("audio", part);
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 200);

    let uploads = recorder.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].content_type, "audio/flac");
    assert_eq!(uploads[0].size, 9);
    assert!(uploads[0].key.starts_with("audio/"));
}

#[tokio::test]
async fn test_duplicate_field_rejected() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_part("audio", wav_part(b"first"))
        .add_part("audio", wav_part(b"second"));
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Upload failed");
    assert!(body["details"]
        .as_str()
        .expect("details in response")
        .contains("Multiple 'audio' fields"));
}

#[tokio::test]
async fn test_extra_fields_ignored() {
    let app = setup_test_app().await;

    let form = MultipartForm::new()
        .add_text("title", "My recording")
        .add_part("audio", wav_part(b"riff-data!"))
        .add_text("notes", "ignored");
    let response = app.client().post("/upload-audio").multipart(form).await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_openapi_spec_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let spec: serde_json::Value = response.json();
    assert!(spec["paths"].get("/").is_some());
    assert!(spec["paths"].get("/upload-audio").is_some());
    assert!(spec["paths"].get("/upload-video").is_some());
}
