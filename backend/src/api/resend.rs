use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::relay_config::RelayConfig;
use crate::handlers::contact_dtos::OutgoingEmail;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("RESEND_API_KEY is not set")]
    NotConfigured,
    #[error("Resend responded with {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("request to Resend failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Anything that can deliver an [`OutgoingEmail`].
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

pub struct ResendMailer {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl ResendMailer {
    pub fn new(api_key: Option<String>, base_url: &str, timeout: Duration) -> Result<Self, MailError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, MailError> {
        Self::new(
            config.resend_api_key.clone(),
            &config.resend_base_url,
            config.mail_timeout,
        )
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let api_key = self.api_key.as_deref().ok_or(MailError::NotConfigured)?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Resend error ({}): {}", status, body);
            return Err(MailError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Contact email handed to Resend for {:?}", email.to);
        Ok(())
    }
}
