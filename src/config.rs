use std::time::Duration;

use tracing::warn;

use crate::version::error::ConfigError;
use crate::version::range::RangeConstraint;

// =============================================================================
// Client defaults
// =============================================================================

/// Default info endpoint polled by the client
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/info";

/// Default range of supported server versions
pub const DEFAULT_VERSION_RANGE: &str = ">=0.1.0";

/// Default poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default timeout for a single fetch in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

pub const ENV_SERVER_URL: &str = "SERVER_URL";
pub const ENV_SUPPORTED_VERSIONS: &str = "SUPPORTED_VERSIONS";
pub const ENV_POLL_INTERVAL: &str = "POLL_INTERVAL_SECONDS";
pub const ENV_FETCH_TIMEOUT: &str = "FETCH_TIMEOUT_SECONDS";

// =============================================================================
// Server defaults
// =============================================================================

/// Default listening port for the info server
pub const DEFAULT_PORT: u16 = 8080;

/// Version reported by the info server unless overridden
pub const DEFAULT_SERVER_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const ENV_PORT: &str = "PORT";
pub const ENV_SERVER_VERSION: &str = "SERVER_VERSION";

/// Client configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: String,
    pub supported_versions: RangeConstraint,
    pub poll_interval: Duration,
    pub fetch_timeout: Duration,
}

impl ClientConfig {
    /// Build the client configuration from the process environment.
    ///
    /// Fails only when `SUPPORTED_VERSIONS` is not a valid range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_url = string_or_default(&lookup, ENV_SERVER_URL, DEFAULT_SERVER_URL);
        let range = string_or_default(&lookup, ENV_SUPPORTED_VERSIONS, DEFAULT_VERSION_RANGE);
        let supported_versions = RangeConstraint::parse(&range)?;

        let poll_interval = secs_or_default(&lookup, ENV_POLL_INTERVAL, DEFAULT_POLL_INTERVAL_SECS);
        let fetch_timeout = secs_or_default(&lookup, ENV_FETCH_TIMEOUT, DEFAULT_FETCH_TIMEOUT_SECS);

        Ok(Self {
            server_url,
            supported_versions,
            poll_interval: Duration::from_secs(poll_interval),
            fetch_timeout: Duration::from_secs(fetch_timeout),
        })
    }
}

/// Info server configuration, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub version: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match non_empty(&lookup, ENV_PORT) {
            None => DEFAULT_PORT,
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(
                    "Invalid value for {}: '{}', using default {}",
                    ENV_PORT, value, DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
        };

        Self {
            port,
            version: string_or_default(&lookup, ENV_SERVER_VERSION, DEFAULT_SERVER_VERSION),
        }
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.is_empty())
}

fn string_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    non_empty(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Positive number of seconds, or the default with a warning
fn secs_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    let Some(value) = non_empty(lookup, key) else {
        return default;
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            warn!(
                "Invalid value for {}: '{}', using default {}",
                key, value, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::RangeError;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn client_config_uses_defaults_when_unset() {
        let config = ClientConfig::from_lookup(env(&[])).unwrap();

        assert_eq!(
            config,
            ClientConfig {
                server_url: "http://localhost:8080/info".to_string(),
                supported_versions: RangeConstraint::parse(">=0.1.0").unwrap(),
                poll_interval: Duration::from_secs(10),
                fetch_timeout: Duration::from_secs(5),
            }
        );
    }

    #[test]
    fn client_config_reads_all_variables() {
        let config = ClientConfig::from_lookup(env(&[
            ("SERVER_URL", "http://example.com:9000/info"),
            ("SUPPORTED_VERSIONS", ">=0.1.0 <0.2.0"),
            ("POLL_INTERVAL_SECONDS", "42"),
            ("FETCH_TIMEOUT_SECONDS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.server_url, "http://example.com:9000/info");
        assert_eq!(config.supported_versions.expression(), ">=0.1.0 <0.2.0");
        assert_eq!(config.poll_interval, Duration::from_secs(42));
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn client_config_treats_empty_values_as_unset() {
        let lookup = env(&[("SERVER_URL", ""), ("SUPPORTED_VERSIONS", "")]);

        let config = ClientConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
        assert_eq!(config.supported_versions.expression(), DEFAULT_VERSION_RANGE);
    }

    #[rstest]
    #[case("not_an_int")]
    #[case("0")]
    #[case("-5")]
    #[case("1.5")]
    fn client_config_falls_back_on_invalid_interval(#[case] value: &str) {
        let lookup = env(&[("POLL_INTERVAL_SECONDS", value)]);

        let config = ClientConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn client_config_fails_on_invalid_range() {
        let err = ClientConfig::from_lookup(env(&[("SUPPORTED_VERSIONS", ">=0.1")])).unwrap_err();

        let ConfigError::InvalidRange(range_err) = err else {
            panic!("expected InvalidRange");
        };
        assert_eq!(
            range_err,
            RangeError::InvalidClause {
                clause: ">=0.1".to_string(),
                expression: ">=0.1".to_string(),
            }
        );
    }

    #[test]
    fn server_config_uses_defaults_when_unset() {
        let config = ServerConfig::from_lookup(env(&[]));

        assert_eq!(config.port, 8080);
        assert_eq!(config.version, DEFAULT_SERVER_VERSION);
        assert!(config.version.starts_with('v'));
    }

    #[test]
    fn server_config_reads_port_and_version() {
        let lookup = env(&[("PORT", "9090"), ("SERVER_VERSION", "v0.2.0-dev")]);

        let config = ServerConfig::from_lookup(lookup);

        assert_eq!(
            config,
            ServerConfig {
                port: 9090,
                version: "v0.2.0-dev".to_string(),
            }
        );
    }

    #[test]
    fn server_config_falls_back_on_invalid_port() {
        let config = ServerConfig::from_lookup(env(&[("PORT", "99999")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
