pub mod api;
pub mod client;
pub mod config;
pub mod departments;
pub mod history;
pub mod models;
pub mod schedule;
pub mod session;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use api::{ApiContext, ServerError};
use client::{ClientError, ClinicApiClient};
use config::PortalConfig;
use session::FileSessionStore;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("Cannot listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Build the shared API context from configuration.
pub fn build_context(config: &PortalConfig) -> Result<ApiContext, ClientError> {
    let client = ClinicApiClient::new(&config.api_base_url, config.api_timeout_secs)?;
    let sessions = FileSessionStore::new(config.session_file.clone());
    Ok(ApiContext::new(
        Arc::new(client),
        Arc::new(sessions),
        config.session_policy(),
    ))
}

/// Run the portal until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = PortalConfig::from_env();
    tracing::info!(
        api = %config.api_base_url,
        session_file = %config.session_file.display(),
        "Configuration loaded"
    );

    let ctx = build_context(&config)?;
    let mut server = api::start_portal_server(config.bind_addr, ctx).await?;

    tokio::signal::ctrl_c().await.map_err(StartupError::Signal)?;
    server.shutdown();
    server.stopped().await;
    Ok(())
}
