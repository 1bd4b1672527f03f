//! Engine configuration.
//!
//! Defaults match the behaviour staff rely on today: any status may be set by hand, and
//! delivery orders need an address.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `ORDERS_TRANSITION_POLICY` | `permissive`, `strict` | `permissive` |
//! | `ORDERS_REQUIRE_DELIVERY_ADDRESS` | `true`, `false` | `true` |
//! | `ORDERS_CHANNEL_BUFFER` | positive integer | `32` |

use crate::model::TransitionPolicy;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub transition_policy: TransitionPolicy,
    pub require_delivery_address: bool,
    /// Capacity of every actor's request channel.
    pub channel_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transition_policy: TransitionPolicy::Permissive,
            require_delivery_address: true,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup("ORDERS_TRANSITION_POLICY") {
            config.transition_policy = parse("ORDERS_TRANSITION_POLICY", value)?;
        }
        if let Some(value) = lookup("ORDERS_REQUIRE_DELIVERY_ADDRESS") {
            config.require_delivery_address = parse("ORDERS_REQUIRE_DELIVERY_ADDRESS", value)?;
        }
        if let Some(value) = lookup("ORDERS_CHANNEL_BUFFER") {
            let buffer: usize = parse("ORDERS_CHANNEL_BUFFER", value.clone())?;
            if buffer == 0 {
                return Err(ConfigError::Invalid {
                    key: "ORDERS_CHANNEL_BUFFER",
                    value,
                    reason: "must be at least 1".into(),
                });
            }
            config.channel_buffer = buffer;
        }
        Ok(config)
    }

    pub fn strict(mut self) -> Self {
        self.transition_policy = TransitionPolicy::Strict;
        self
    }

    pub fn allow_missing_address(mut self) -> Self {
        self.require_delivery_address = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.require_delivery_address);
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("ORDERS_TRANSITION_POLICY", "strict"),
            ("ORDERS_REQUIRE_DELIVERY_ADDRESS", "false"),
            ("ORDERS_CHANNEL_BUFFER", "8"),
        ]))
        .unwrap();
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert!(!config.require_delivery_address);
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn test_bad_values_are_reported() {
        let err = EngineConfig::from_lookup(lookup(&[("ORDERS_CHANNEL_BUFFER", "lots")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "ORDERS_CHANNEL_BUFFER",
                ..
            }
        ));
        assert!(EngineConfig::from_lookup(lookup(&[("ORDERS_CHANNEL_BUFFER", "0")])).is_err());
        assert!(
            EngineConfig::from_lookup(lookup(&[("ORDERS_REQUIRE_DELIVERY_ADDRESS", "maybe")]))
                .is_err()
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "transition_policy": "strict" }"#).unwrap();
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
    }
}
