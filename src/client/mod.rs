//! Polling client
//!
//! # Modules
//!
//! - [`http`]: reqwest-based `InfoProvider` for a server's `/info` endpoint
//! - [`poller`]: Cancellable loop that checks the reported version on an interval

pub mod http;
pub mod poller;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::ClientConfig;
use crate::version::error::ConfigError;
use http::HttpInfoProvider;
use poller::Poller;

/// Build the client from its configuration and poll until `cancel` fires
pub async fn run_client(
    config: ClientConfig,
    cancel: CancellationToken,
) -> Result<(), ConfigError> {
    info!("Starting client with configuration:");
    info!("  Server URL: {}", config.server_url);
    info!("  Supported versions: {}", config.supported_versions);
    info!("  Poll interval: {:?}", config.poll_interval);
    info!("  Fetch timeout: {:?}", config.fetch_timeout);

    let provider = HttpInfoProvider::new(&config.server_url, config.fetch_timeout)?;
    let poller = Poller::new(provider, config.supported_versions, config.poll_interval);
    poller.run(cancel).await;

    Ok(())
}
