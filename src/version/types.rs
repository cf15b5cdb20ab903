//! Wire types shared by the info server and the polling client

use serde::{Deserialize, Serialize};

/// Body of the `/info` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Reported version; the server does not validate its format
    pub version: String,
}

impl ServerInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}
