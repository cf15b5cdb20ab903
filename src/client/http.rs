//! HTTP implementation of the info provider

use std::time::Duration;

use tracing::warn;

use crate::version::error::{ConfigError, FetchError};
use crate::version::provider::InfoProvider;
use crate::version::types::ServerInfo;

/// Info provider that GETs a server's `/info` endpoint
pub struct HttpInfoProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpInfoProvider {
    /// Creates a provider for `url`; every request is bounded by `timeout`
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("version-probe/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl InfoProvider for HttpInfoProvider {
    fn target(&self) -> String {
        self.url.clone()
    }

    async fn fetch_info(&self) -> Result<ServerInfo, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        response.json::<ServerInfo>().await.map_err(|e| {
            warn!("Failed to parse info response from {}: {}", self.url, e);
            FetchError::InvalidResponse(e.to_string())
        })
    }
}
