use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid version '{raw}': {reason}")]
pub struct VersionParseError {
    /// The string exactly as it was reported, before any stripping
    pub raw: String,
    pub reason: String,
}

impl VersionParseError {
    pub fn new(raw: &str, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Empty version range: '{expression}'")]
    Empty { expression: String },

    #[error("Invalid clause '{clause}' in version range '{expression}'")]
    InvalidClause { clause: String, expression: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server at {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidRange(#[from] RangeError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
