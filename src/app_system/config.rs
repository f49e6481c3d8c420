use std::env;
use thiserror::Error;

pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings for the punch system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of the punch actor's request channel.
    pub buffer_size: usize,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads `PUNCH_BUFFER_SIZE` and `PUNCH_LOG`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup("PUNCH_BUFFER_SIZE") {
            config.buffer_size = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "PUNCH_BUFFER_SIZE",
                        value: raw,
                    })
                }
            };
        }
        if let Some(filter) = lookup("PUNCH_LOG") {
            config.log_filter = filter;
        }
        Ok(config)
    }
}
