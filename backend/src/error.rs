use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::resend::MailError;
use crate::handlers::contact_dtos::BodyError;

/// Everything that can go wrong while relaying a contact submission.
///
/// The `Display` text is exactly what the caller sees in `{"error": ...}`,
/// so provider details stay in the `source` and only reach the logs.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Alle Felder sind erforderlich.")]
    MissingFields,
    #[error("{field} darf höchstens {max} Zeichen lang sein.")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("Bitte gib eine gültige E-Mail-Adresse an.")]
    InvalidEmail,
    #[error("Email service not configured.")]
    NotConfigured,
    #[error("E-Mail konnte nicht gesendet werden.")]
    DeliveryFailed(#[source] MailError),
    #[error("Interner Serverfehler.")]
    Internal(#[source] MailError),
    #[error("Interner Serverfehler.")]
    UnreadableBody(#[source] BodyError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingFields
            | RelayError::FieldTooLong { .. }
            | RelayError::InvalidEmail => StatusCode::BAD_REQUEST,
            RelayError::NotConfigured
            | RelayError::DeliveryFailed(_)
            | RelayError::Internal(_)
            | RelayError::UnreadableBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MailError> for RelayError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::NotConfigured => RelayError::NotConfigured,
            err @ MailError::Upstream { .. } => RelayError::DeliveryFailed(err),
            err @ MailError::Transport(_) => RelayError::Internal(err),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match std::error::Error::source(&self) {
                Some(cause) => tracing::error!("Contact relay failed: {} ({})", self, cause),
                None => tracing::error!("Contact relay failed: {}", self),
            }
        } else {
            tracing::debug!("Rejected contact submission: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
