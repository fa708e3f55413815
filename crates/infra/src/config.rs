//! Configuration loading and representation.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `STOCKROOM_LOG` | log filter directive (falls back to `RUST_LOG`) | `warn` |
//! | `STOCKROOM_LOG_FORMAT` | `json`, `pretty` or `compact` | `json` |

use thiserror::Error;

use stockroom_observability::{LogFormat, TracingConfig};

pub const LOG_FILTER_VAR: &str = "STOCKROOM_LOG";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
const FALLBACK_LOG_FILTER_VAR: &str = "RUST_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Process configuration for the catalog console.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    pub tracing: TracingConfig,
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR)
            .or_else(|| lookup(FALLBACK_LOG_FILTER_VAR))
            .filter(|f| !f.trim().is_empty())
        {
            config.tracing.filter = filter;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.tracing.format =
                raw.parse::<LogFormat>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: LOG_FORMAT_VAR,
                        value: raw.clone(),
                    })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.tracing.filter, "warn");
        assert_eq!(config.tracing.format, LogFormat::Json);
    }

    #[test]
    fn own_filter_variable_wins_over_rust_log() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            ("STOCKROOM_LOG", "stockroom_infra=debug"),
            ("RUST_LOG", "trace"),
        ]))
        .unwrap();
        assert_eq!(config.tracing.filter, "stockroom_infra=debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let config = CatalogConfig::from_lookup(lookup_from(&[("RUST_LOG", "info")])).unwrap();
        assert_eq!(config.tracing.filter, "info");
    }

    #[test]
    fn parses_log_format() {
        let config =
            CatalogConfig::from_lookup(lookup_from(&[("STOCKROOM_LOG_FORMAT", "pretty")])).unwrap();
        assert_eq!(config.tracing.format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = CatalogConfig::from_lookup(lookup_from(&[("STOCKROOM_LOG_FORMAT", "yaml")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "STOCKROOM_LOG_FORMAT",
                value: "yaml".to_string(),
            }
        );
    }
}
