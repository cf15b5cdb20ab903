//! Info provider trait for fetching the version a server reports

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;
use crate::version::types::ServerInfo;

/// Trait for querying a server's version info
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait InfoProvider: Send + Sync {
    /// Human-readable location of the server, used in log output
    fn target(&self) -> String;

    /// Fetches the server's current version info
    ///
    /// # Returns
    /// * `Ok(ServerInfo)` - The reported version, unvalidated
    /// * `Err(FetchError)` - Transport failure, non-success status or malformed payload
    async fn fetch_info(&self) -> Result<ServerInfo, FetchError>;
}
