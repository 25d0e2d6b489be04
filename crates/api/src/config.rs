//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use vitrine_observability::LogFormat;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `VITRINE_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `VITRINE_FIXTURES`: JSON catalog to preload.
    pub fixtures: Option<PathBuf>,
    /// `VITRINE_LOG_FORMAT`: `json` or `pretty`.
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            fixtures: None,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Read the process environment, honoring a `.env` file if present.
    ///
    /// Returns the config plus one message per invalid value that fell back to
    /// its default. Logging is not initialized yet when this runs, so callers
    /// log the messages once it is.
    pub fn from_env() -> (Self, Vec<String>) {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values fall back to
    /// defaults and are reported in the returned messages.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let bind_addr = match lookup("VITRINE_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warnings.push(format!(
                    "invalid VITRINE_BIND_ADDR `{raw}` ({e}); using {DEFAULT_BIND_ADDR}"
                ));
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let log_format = match lookup("VITRINE_LOG_FORMAT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warnings.push(format!("{e}; using json"));
                defaults.log_format
            }),
            None => defaults.log_format,
        };

        let fixtures = lookup("VITRINE_FIXTURES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            bind_addr,
            fixtures,
            log_format,
        };
        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let (config, warnings) = ApiConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ApiConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(ApiConfig::default().bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_all_keys() {
        let (config, warnings) = ApiConfig::from_lookup(lookup(&[
            ("VITRINE_BIND_ADDR", "127.0.0.1:9000"),
            ("VITRINE_FIXTURES", "fixtures/catalog.json"),
            ("VITRINE_LOG_FORMAT", "pretty"),
        ]));
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.fixtures, Some(PathBuf::from("fixtures/catalog.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_values_fall_back() {
        let (config, warnings) = ApiConfig::from_lookup(lookup(&[
            ("VITRINE_BIND_ADDR", "not an address"),
            ("VITRINE_LOG_FORMAT", "xml"),
            ("VITRINE_FIXTURES", "  "),
        ]));
        assert_eq!(config, ApiConfig::default());

        // Reported back rather than logged, since no subscriber exists yet.
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("VITRINE_BIND_ADDR `not an address`"));
        assert!(warnings[1].contains("xml"));
    }
}
