//! Runtime configuration, read from the environment.

use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// What happens to stored names when a physician is matched by physician id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameCasing {
    /// Names stay as first stored.
    #[default]
    Frozen,
    /// A re-cased submission of the same name replaces the stored casing.
    /// A different name is still ignored.
    Follow,
}

impl FromStr for NameCasing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frozen" => Ok(NameCasing::Frozen),
            "follow" => Ok(NameCasing::Follow),
            other => Err(format!("unknown name casing '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Request buffer of each store actor.
    pub channel_capacity: usize,
    pub name_casing: NameCasing,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            name_casing: NameCasing::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads `BOOK_CHANNEL_CAPACITY`, `BOOK_ID_NAME_CASING` and `BOOK_LOG_FILTER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_capacity = match lookup("BOOK_CHANNEL_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        name: "BOOK_CHANNEL_CAPACITY",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(capacity) => capacity,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: "BOOK_CHANNEL_CAPACITY",
                        reason: e.to_string(),
                    })
                }
            },
            None => defaults.channel_capacity,
        };

        let name_casing = match lookup("BOOK_ID_NAME_CASING") {
            Some(raw) => raw
                .parse::<NameCasing>()
                .map_err(|reason| ConfigError::InvalidValue {
                    name: "BOOK_ID_NAME_CASING",
                    reason,
                })?,
            None => defaults.name_casing,
        };

        let log_filter = lookup("BOOK_LOG_FILTER").unwrap_or(defaults.log_filter);

        Ok(Config {
            channel_capacity,
            name_casing,
            log_filter,
        })
    }
}
