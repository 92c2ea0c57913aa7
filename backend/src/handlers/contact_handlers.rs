use std::sync::Arc;
use axum::{body::Bytes, extract::State, Json};

use crate::AppState;
use crate::error::RelayError;
use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};

pub async fn send_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ContactResponse>, RelayError> {
    let request = ContactRequest::from_body(&body).map_err(RelayError::UnreadableBody)?;

    let submission = request.validate()?;
    let email = submission.to_email(&state.sender, &state.recipients);

    state.mailer.send(&email).await?;

    tracing::info!("Relayed contact request to {} recipient(s)", email.to.len());
    Ok(Json(ContactResponse { success: true }))
}

pub async fn health_check() -> &'static str {
    "OK"
}
