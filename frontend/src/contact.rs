use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const MESSAGE_MAX: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ContactForm {
    /// Trimmed payload, or `None` while any field is blank.
    pub fn payload(&self) -> Option<ContactPayload> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return None;
        }

        Some(ContactPayload {
            name: clip(name, NAME_MAX),
            email: clip(email, EMAIL_MAX),
            message: clip(message, MESSAGE_MAX),
        })
    }
}

fn clip(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

pub fn relay_url() -> String {
    format!("{}/api/send-contact", config::get_backend_url())
}

/// Posts the payload to the relay. The error is the text to show the visitor.
pub async fn submit(payload: &ContactPayload) -> Result<(), String> {
    let request = Request::post(&relay_url())
        .json(payload)
        .map_err(|e| e.to_string())?;

    let response = request.send().await.map_err(|e| {
        log::error!("Contact request failed: {}", e);
        e.to_string()
    })?;

    if response.ok() {
        return Ok(());
    }

    log::warn!("Contact relay answered {}", response.status());
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("HTTP {}", response.status())),
    }
}
