//! Compatibility classification for reported versions

use crate::version::error::FetchError;
use crate::version::range::RangeConstraint;
use crate::version::semver::parse_reported_version;
use crate::version::types::ServerInfo;

/// Result of a single compatibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Version string as reported by the server (None if the fetch failed)
    pub raw_version: Option<String>,
    /// Compatibility status
    pub status: CompatStatus,
    /// Human-readable description of the outcome
    pub message: String,
}

/// Outcome of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatStatus {
    /// Reported version satisfies the range
    Compatible,
    /// Reported version is outside the range
    Incompatible,
    /// Version info could not be fetched
    FetchError,
    /// Reported version could not be parsed
    ParseError,
}

impl CompatStatus {
    /// Short label used as the `status` field in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatStatus::Compatible => "compatible",
            CompatStatus::Incompatible => "incompatible",
            CompatStatus::FetchError => "fetch_error",
            CompatStatus::ParseError => "parse_error",
        }
    }
}

/// Classify the result of a fetch against the supported range
pub fn check_compatibility(
    fetched: Result<ServerInfo, FetchError>,
    constraint: &RangeConstraint,
) -> CheckResult {
    match fetched {
        Ok(info) => evaluate_version(&info.version, constraint),
        Err(e) => CheckResult {
            raw_version: None,
            status: CompatStatus::FetchError,
            message: format!("Error getting server info: {}", e),
        },
    }
}

/// Classify a reported version string against the supported range
pub fn evaluate_version(raw: &str, constraint: &RangeConstraint) -> CheckResult {
    let (status, message) = match parse_reported_version(raw) {
        Err(e) => (
            CompatStatus::ParseError,
            format!("Server returned invalid version: {}", e),
        ),
        Ok(reported) if constraint.check(&reported.version) => (
            CompatStatus::Compatible,
            format!("Server version {} is compatible with {}", raw, constraint),
        ),
        Ok(_) => (
            CompatStatus::Incompatible,
            format!(
                "Server version {} is NOT compatible with {}",
                raw, constraint
            ),
        ),
    };

    CheckResult {
        raw_version: Some(raw.to_string()),
        status,
        message,
    }
}
