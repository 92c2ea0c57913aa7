use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod error;
pub mod telemetry;

pub mod config {
    pub mod relay_config;
}
pub mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
pub mod api {
    pub mod resend;
}

use api::resend::Mailer;
use handlers::contact_handlers;

pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    pub sender: String,
    pub recipients: Vec<String>,
}

// Headers the supabase-js client attaches when invoking functions.
const CLIENT_HEADERS: [&str; 6] = [
    "x-client-info",
    "apikey",
    "x-supabase-client-platform",
    "x-supabase-client-platform-version",
    "x-supabase-client-runtime",
    "x-supabase-client-runtime-version",
];

pub fn cors_layer() -> CorsLayer {
    let mut allowed_headers = vec![header::AUTHORIZATION, header::CONTENT_TYPE];
    allowed_headers.extend(CLIENT_HEADERS.iter().map(|h| HeaderName::from_static(*h)));

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(AllowHeaders::list(allowed_headers))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(contact_handlers::health_check))
        .route("/api/send-contact", post(contact_handlers::send_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer())
        .with_state(state)
}
