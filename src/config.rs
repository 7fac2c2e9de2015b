//! Host configuration for new games and logging.
//!
//! Values come from `CHESS_CORE_*` environment variables, falling back to
//! the defaults below when a variable is unset or empty.

use std::env;

pub const ENV_EVENT: &str = "CHESS_CORE_EVENT";
pub const ENV_SITE: &str = "CHESS_CORE_SITE";
pub const ENV_WHITE: &str = "CHESS_CORE_WHITE";
pub const ENV_BLACK: &str = "CHESS_CORE_BLACK";
pub const ENV_LOG: &str = "CHESS_CORE_LOG";

/// Settings used to seed game metadata and the log filter of a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub event: String,
    pub site: String,
    pub white: String,
    pub black: String,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"chess_core=debug"`.
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            event: "Casual Game".to_owned(),
            site: "Local".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
            log_filter: "info".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            event: pick(ENV_EVENT, defaults.event),
            site: pick(ENV_SITE, defaults.site),
            white: pick(ENV_WHITE, defaults.white),
            black: pick(ENV_BLACK, defaults.black),
            log_filter: pick(ENV_LOG, defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn lookup_values_override_defaults_and_blank_values_are_ignored() {
        let config = EngineConfig::from_lookup(|key| match key {
            ENV_WHITE => Some("Alice".to_owned()),
            ENV_BLACK => Some("   ".to_owned()),
            ENV_LOG => Some("chess_core=trace".to_owned()),
            _ => None,
        });
        assert_eq!(config.white, "Alice");
        assert_eq!(config.black, "Black");
        assert_eq!(config.log_filter, "chess_core=trace");
        assert_eq!(config.event, "Casual Game");
    }
}
