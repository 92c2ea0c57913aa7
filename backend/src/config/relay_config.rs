use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_SENDER: &str = "upward Solution <onboarding@resend.dev>";
pub const DEFAULT_RECIPIENT: &str = "julian.schumacher99@web.de";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not a valid socket address: {1}")]
    InvalidAddr(String, std::net::AddrParseError),
    #[error("MAIL_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("CONTACT_TO does not contain any recipient")]
    NoRecipients,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// `None` keeps the server up; submissions then fail with 500.
    pub resend_api_key: Option<String>,
    pub resend_base_url: String,
    pub sender: String,
    pub recipients: Vec<String>,
    pub bind_addr: SocketAddr,
    pub mail_timeout: Duration,
    pub sentry_dsn: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = non_blank("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddr(bind_raw.clone(), e))?;

        let mail_timeout = match non_blank("MAIL_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_MAIL_TIMEOUT_SECS),
        };

        let recipients: Vec<String> = non_blank("CONTACT_TO")
            .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string())
            .split(',')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        if recipients.is_empty() {
            return Err(ConfigError::NoRecipients);
        }

        Ok(Self {
            resend_api_key: non_blank("RESEND_API_KEY"),
            resend_base_url: non_blank("RESEND_BASE_URL")
                .unwrap_or_else(|| DEFAULT_RESEND_BASE_URL.to_string()),
            sender: non_blank("CONTACT_FROM").unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            recipients,
            bind_addr,
            mail_timeout,
            sentry_dsn: non_blank("SENTRY_DSN"),
        })
    }
}
