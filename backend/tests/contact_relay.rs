use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use upward_backend::{
    api::resend::{MailError, Mailer, ResendMailer},
    handlers::contact_dtos::OutgoingEmail,
    router, AppState,
};

const ORIGIN: &str = "https://upward-solution.example";

enum Outcome {
    Delivered,
    Unconfigured,
    Rejected,
}

struct FakeMailer {
    outcome: Outcome,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl FakeMailer {
    fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        match self.outcome {
            Outcome::Delivered => Ok(()),
            Outcome::Unconfigured => Err(MailError::NotConfigured),
            Outcome::Rejected => Err(MailError::Upstream {
                status: 403,
                body: "{\"message\":\"API key is invalid\"}".to_string(),
            }),
        }
    }
}

fn app_with(mailer: Arc<dyn Mailer>) -> Router {
    router(Arc::new(AppState {
        mailer,
        sender: "upward Solution <onboarding@resend.dev>".to_string(),
        recipients: vec!["owner@example.com".to_string()],
    }))
}

fn post_contact(body: &str) -> Request<Body> {
    post_contact_as(body, Some("application/json"))
}

fn post_contact_as(body: &str, content_type: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/send-contact")
        .header(header::ORIGIN, ORIGIN);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn delivers_well_formed_submission() {
    let mailer = FakeMailer::new(Outcome::Delivered);
    let body = json!({"name": "Ada", "email": "ada@example.com", "message": "Hallo!"}).to_string();

    let (status, headers, bytes) = call(app_with(mailer.clone()), post_contact(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes), json!({"success": true}));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Neue Kontaktanfrage von Ada");
    assert_eq!(sent[0].to, vec!["owner@example.com".to_string()]);
}

#[tokio::test]
async fn missing_fields_are_rejected_before_sending() {
    let bodies = [
        json!({"email": "ada@example.com", "message": "Hallo"}),
        json!({"name": "Ada", "message": "Hallo"}),
        json!({"name": "Ada", "email": "ada@example.com"}),
        json!({"name": "", "email": "ada@example.com", "message": "Hallo"}),
        json!({}),
    ];

    for body in bodies {
        let mailer = FakeMailer::new(Outcome::Delivered);
        let (status, headers, bytes) =
            call(app_with(mailer.clone()), post_contact(&body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(as_json(&bytes), json!({"error": "Alle Felder sind erforderlich."}));
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(mailer.sent().is_empty());
    }
}

#[tokio::test]
async fn accepts_json_sent_without_json_content_type() {
    let body = json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"}).to_string();

    for content_type in [Some("text/plain;charset=UTF-8"), None] {
        let mailer = FakeMailer::new(Outcome::Delivered);
        let (status, headers, bytes) =
            call(app_with(mailer.clone()), post_contact_as(&body, content_type)).await;

        assert_eq!(status, StatusCode::OK, "content type: {:?}", content_type);
        assert_eq!(as_json(&bytes), json!({"success": true}));
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(mailer.sent().len(), 1);
    }
}

#[tokio::test]
async fn unreadable_body_is_a_generic_server_error() {
    for body in ["name=Ada", "null", ""] {
        let mailer = FakeMailer::new(Outcome::Delivered);
        let (status, headers, bytes) = call(app_with(mailer.clone()), post_contact(body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {:?}", body);
        assert_eq!(as_json(&bytes), json!({"error": "Interner Serverfehler."}));
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(mailer.sent().is_empty());
    }
}

#[tokio::test]
async fn non_object_json_is_missing_every_field() {
    let mailer = FakeMailer::new(Outcome::Delivered);
    let (status, _, bytes) = call(app_with(mailer.clone()), post_contact("[1, 2]")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes), json!({"error": "Alle Felder sind erforderlich."}));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn numeric_name_is_relayed_as_text() {
    let mailer = FakeMailer::new(Outcome::Delivered);
    let body = json!({"name": 42, "email": "ada@example.com", "message": "Hi"}).to_string();

    let (status, _, _) = call(app_with(mailer.clone()), post_contact(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mailer.sent()[0].subject, "Neue Kontaktanfrage von 42");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn relayed_submission_is_logged_without_personal_data() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mailer = FakeMailer::new(Outcome::Delivered);
    let body = json!({
        "name": "Ada Lovelace",
        "email": "ada.lovelace@example.com",
        "message": "Private Nachricht"
    })
    .to_string();
    let (status, _, _) = call(app_with(mailer), post_contact(&body)).await;

    assert_eq!(status, StatusCode::OK);
    let text = logs.text();
    assert!(text.contains("Relayed contact request"), "logs: {}", text);
    for secret in ["Lovelace", "ada.lovelace@example.com", "Private Nachricht"] {
        assert!(!text.contains(secret), "logged {}: {}", secret, text);
    }
}

#[tokio::test]
async fn missing_credential_is_a_server_error() {
    let mailer = FakeMailer::new(Outcome::Unconfigured);
    let body = json!({"name": "Ada", "email": "ada@example.com", "message": "Hallo"}).to_string();

    let (status, _, bytes) = call(app_with(mailer), post_contact(&body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(as_json(&bytes), json!({"error": "Email service not configured."}));
}

#[tokio::test]
async fn upstream_failure_does_not_leak_provider_error() {
    let mailer = FakeMailer::new(Outcome::Rejected);
    let body = json!({"name": "Ada", "email": "ada@example.com", "message": "Hallo"}).to_string();

    let (status, _, bytes) = call(app_with(mailer), post_contact(&body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(as_json(&bytes), json!({"error": "E-Mail konnte nicht gesendet werden."}));
    assert!(!String::from_utf8_lossy(&bytes).contains("API key is invalid"));
}

#[tokio::test]
async fn preflight_returns_cors_headers_without_body() {
    let mailer = FakeMailer::new(Outcome::Delivered);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/send-contact")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, x-client-info, apikey, content-type")
        .body(Body::empty())
        .unwrap();

    let (status, headers, bytes) = call(app_with(mailer.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));

    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    for name in ["authorization", "content-type", "x-client-info", "apikey"] {
        assert!(allowed.contains(name), "{} not allowed in {}", name, allowed);
    }
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn health_check_answers_ok() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, _, bytes) = call(app_with(FakeMailer::new(Outcome::Delivered)), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"OK");
}

fn sample_email() -> OutgoingEmail {
    OutgoingEmail {
        from: "upward Solution <onboarding@resend.dev>".to_string(),
        to: vec!["owner@example.com".to_string()],
        subject: "Neue Kontaktanfrage von Ada".to_string(),
        html: "<h2>Neue Kontaktanfrage</h2>".to_string(),
        reply_to: Some("ada@example.com".to_string()),
    }
}

#[tokio::test]
async fn resend_mailer_posts_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("authorization", "Bearer re_test_key")
                .header("content-type", "application/json")
                .body_contains("Neue Kontaktanfrage von Ada")
                .body_contains("owner@example.com");
            then.status(200).json_body(json!({"id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c"}));
        })
        .await;

    let mailer = ResendMailer::new(
        Some("re_test_key".to_string()),
        &server.base_url(),
        Duration::from_secs(5),
    )
    .unwrap();

    mailer.send(&sample_email()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn resend_mailer_reports_upstream_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(422).body("{\"message\":\"The domain is not verified\"}");
        })
        .await;

    let mailer = ResendMailer::new(
        Some("re_test_key".to_string()),
        &format!("{}/", server.base_url()),
        Duration::from_secs(5),
    )
    .unwrap();

    match mailer.send(&sample_email()).await {
        Err(MailError::Upstream { status, body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("domain is not verified"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn resend_mailer_without_key_never_calls_out() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(200);
        })
        .await;

    let mailer = ResendMailer::new(None, &server.base_url(), Duration::from_secs(5)).unwrap();

    assert!(matches!(
        mailer.send(&sample_email()).await,
        Err(MailError::NotConfigured)
    ));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn relay_hides_provider_rejection_end_to_end() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(500).body("internal provider trace: db timeout");
        })
        .await;

    let mailer = ResendMailer::new(
        Some("re_test_key".to_string()),
        &server.base_url(),
        Duration::from_secs(5),
    )
    .unwrap();
    let body = json!({"name": "Ada", "email": "ada@example.com", "message": "Hallo"}).to_string();

    let (status, _, bytes) = call(app_with(Arc::new(mailer)), post_contact(&body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(as_json(&bytes), json!({"error": "E-Mail konnte nicht gesendet werden."}));
}

#[tokio::test]
async fn unreachable_provider_is_an_internal_error() {
    // Nothing listens on port 9 of the loopback interface in the test environment.
    let mailer = ResendMailer::new(
        Some("re_test_key".to_string()),
        "http://127.0.0.1:9",
        Duration::from_secs(2),
    )
    .unwrap();
    let body = json!({"name": "Ada", "email": "ada@example.com", "message": "Hallo"}).to_string();

    let (status, _, bytes) = call(app_with(Arc::new(mailer)), post_contact(&body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(as_json(&bytes), json!({"error": "Interner Serverfehler."}));
}
