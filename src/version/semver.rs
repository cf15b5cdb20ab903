use std::fmt;

use semver::Version;

use crate::version::error::VersionParseError;

/// A version as reported by the info endpoint.
///
/// Only the numeric triple takes part in comparisons. The pre-release label is
/// kept so it can be shown in log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedVersion {
    /// Numeric part, always without pre-release or build metadata
    pub version: Version,
    /// Text after the first '-', if any (e.g. "dev" for "v0.1.1-dev")
    pub pre_release: Option<String>,
}

impl fmt::Display for ReportedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

/// Parse a reported version string, tolerating a "v" prefix and a pre-release suffix.
///
/// Examples:
/// - "v0.1.1" -> 0.1.1
/// - "0.1.1-dev" -> 0.1.1 (pre-release "dev")
/// - "v0.1.1-rc.1-hotfix" -> 0.1.1 (pre-release "rc.1-hotfix")
/// - "0.1" -> error
pub fn parse_reported_version(raw: &str) -> Result<ReportedVersion, VersionParseError> {
    let unprefixed = raw.strip_prefix('v').unwrap_or(raw);

    let (numeric, pre_release) = match unprefixed.split_once('-') {
        Some((numeric, pre)) => (numeric, Some(pre.to_string())),
        None => (unprefixed, None),
    };

    let version =
        parse_version_triple(numeric).map_err(|reason| VersionParseError::new(raw, reason))?;

    Ok(ReportedVersion {
        version,
        pre_release,
    })
}

/// Parse a strict "MAJOR.MINOR.PATCH" triple.
///
/// No prefix or suffix is accepted, so "1.2.3+build" and "1.2" are both rejected.
/// Returns the reason on failure.
pub fn parse_version_triple(text: &str) -> Result<Version, String> {
    let parts: Vec<&str> = text.split('.').collect();
    let [major, minor, patch] = parts.as_slice() else {
        return Err(format!(
            "expected MAJOR.MINOR.PATCH, found {} component(s)",
            parts.len()
        ));
    };

    Ok(Version::new(
        parse_component("major", major)?,
        parse_component("minor", minor)?,
        parse_component("patch", patch)?,
    ))
}

fn parse_component(name: &str, text: &str) -> Result<u64, String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{} component '{}' is not a number", name, text));
    }
    text.parse::<u64>()
        .map_err(|e| format!("{} component '{}': {}", name, text, e))
}
