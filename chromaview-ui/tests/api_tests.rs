//! Router-level tests: session gating, auth endpoints, upload round trip

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use chromaview_ui::parser::MzxmlParser;
use chromaview_ui::render::SvgRenderer;
use chromaview_ui::services::{ArtifactIngestor, MetaboliteClient};
use chromaview_ui::{build_router, AppState};

const SAMPLE_MZXML: &str = r#"<mzXML><msRun>
    <scan num="1" retentionTime="PT0.5S" totIonCurrent="100.0"/>
    <scan num="2" retentionTime="PT1.5S" totIonCurrent="250.5"/>
</msRun></mzXML>"#;

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = chromaview_common::db::init_database(&dir.path().join("chromaview.db"))
        .await
        .unwrap();

    let state = AppState::new(
        db,
        ArtifactIngestor::new(dir.path().join("staging")),
        Arc::new(MzxmlParser::new()),
        Arc::new(SvgRenderer::new()),
        // Never dialed in these tests
        MetaboliteClient::with_base_url("http://127.0.0.1:9".to_string()).unwrap(),
    );

    (build_router(state), dir)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn signup_and_login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_post(
            "/api/signup",
            serde_json::json!({"username": username, "password": password, "confirm": password}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/login",
            serde_json::json!({"username": username, "password": password}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _dir) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "chromaview-ui");
}

#[tokio::test]
async fn login_with_unknown_user_is_401() {
    let (app, _dir) = test_app().await;

    let response = app
        .oneshot(json_post(
            "/api/login",
            serde_json::json!({"username": "alice", "password": "pw1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn duplicate_signup_is_409() {
    let (app, _dir) = test_app().await;

    let payload =
        serde_json::json!({"username": "alice", "password": "pw1", "confirm": "pw1"});

    let response = app.clone().oneshot(json_post("/api/signup", payload.clone())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(json_post("/api/signup", payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn mismatched_confirmation_is_400() {
    let (app, _dir) = test_app().await;

    let response = app
        .oneshot(json_post(
            "/api/signup",
            serde_json::json!({"username": "alice", "password": "pw1", "confirm": "pw2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_without_session_is_401() {
    let (app, _dir) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chromatogram")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUND")
                .body(Body::from("--XBOUND--\r\n"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn metabolites_without_session_is_401() {
    let (app, _dir) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/metabolites?compound=citrate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

fn multipart_upload(session_id: &str, filename: &str, content: &str) -> Request<Body> {
    let boundary = "XBOUNDARYX";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {content}\r\n\
         --{boundary}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/api/chromatogram")
        .header("x-session-id", session_id)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_round_trip_returns_svg() {
    let (app, _dir) = test_app().await;
    let session_id = signup_and_login(&app, "alice", "pw1").await;

    let response = app
        .oneshot(multipart_upload(&session_id, "run1.mzXML", SAMPLE_MZXML))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["point_count"], 2);
    assert!(body["svg"].as_str().unwrap().starts_with("<svg"));
}

#[tokio::test]
async fn corrupt_upload_is_400_with_detail() {
    let (app, _dir) = test_app().await;
    let session_id = signup_and_login(&app, "alice", "pw1").await;

    let response = app
        .oneshot(multipart_upload(&session_id, "broken.mzXML", "not xml"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn scanless_upload_is_422() {
    let (app, _dir) = test_app().await;
    let session_id = signup_and_login(&app, "alice", "pw1").await;

    let response = app
        .oneshot(multipart_upload(
            &session_id,
            "empty.mzXML",
            r#"<mzXML><msRun scanCount="0"></msRun></mzXML>"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn wrong_extension_is_rejected() {
    let (app, _dir) = test_app().await;
    let session_id = signup_and_login(&app, "alice", "pw1").await;

    let response = app
        .oneshot(multipart_upload(&session_id, "track.mp3", SAMPLE_MZXML))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let (app, _dir) = test_app().await;
    let session_id = signup_and_login(&app, "alice", "pw1").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/logout")
                .header("x-session-id", &session_id)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(multipart_upload(&session_id, "run1.mzXML", SAMPLE_MZXML))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
