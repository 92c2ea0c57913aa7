use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;

use upward_backend::{
    api::resend::ResendMailer,
    config::relay_config::RelayConfig,
    router, telemetry, AppState,
};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down contact relay");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    telemetry::init_tracing();

    let config = RelayConfig::from_env()?;
    let _guard = telemetry::init_sentry(config.sentry_dsn.as_deref());

    if config.resend_api_key.is_none() {
        tracing::warn!("RESEND_API_KEY is not set, contact submissions will be answered with 500");
    }

    let mailer = ResendMailer::from_config(&config)?;
    let state = Arc::new(AppState {
        mailer: Arc::new(mailer),
        sender: config.sender.clone(),
        recipients: config.recipients.clone(),
    });

    let app = router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Contact relay listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
