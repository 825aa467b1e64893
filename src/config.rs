//! Runtime configuration from environment variables.
//!
//! `main` loads a `.env` file first, so values can live there too.

use crate::error::CidrError;
use crate::models::CidrBounds;
use std::env;

pub const ENV_CIDR_MIN: &str = "SUBNET_CALC_CIDR_MIN";
pub const ENV_CIDR_MAX: &str = "SUBNET_CALC_CIDR_MAX";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Accepted prefix lengths.
    pub bounds: CidrBounds,
    /// Path of the log4rs config file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bounds: CidrBounds::default(),
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, CidrError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration from the environment, preferring the given overrides.
    ///
    /// An env key is not parsed when its override is set, so a broken value
    /// can be replaced from the command line.
    pub fn from_env_with_overrides(
        min: Option<u8>,
        max: Option<u8>,
        log_config: Option<String>,
    ) -> Result<Config, CidrError> {
        Config::from_lookup_with_overrides(|key| env::var(key).ok(), min, max, log_config)
    }

    /// Build configuration from any key lookup, unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, CidrError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Config::from_lookup_with_overrides(lookup, None, None, None)
    }

    fn from_lookup_with_overrides<F>(
        lookup: F,
        min: Option<u8>,
        max: Option<u8>,
        log_config: Option<String>,
    ) -> Result<Config, CidrError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let min = match min {
            Some(min) => min,
            None => read_prefix(&lookup, ENV_CIDR_MIN)?.unwrap_or(defaults.bounds.min),
        };
        let max = match max {
            Some(max) => max,
            None => read_prefix(&lookup, ENV_CIDR_MAX)?.unwrap_or(defaults.bounds.max),
        };
        let log_config = log_config
            .or_else(|| lookup(ENV_LOG_CONFIG))
            .unwrap_or(defaults.log_config);

        let config = Config {
            bounds: CidrBounds::new(min, max)?,
            log_config,
        };
        Ok(config)
    }

    /// Apply command line overrides on top of this configuration.
    pub fn with_overrides(
        self,
        min: Option<u8>,
        max: Option<u8>,
        log_config: Option<String>,
    ) -> Result<Config, CidrError> {
        let bounds = CidrBounds::new(
            min.unwrap_or(self.bounds.min),
            max.unwrap_or(self.bounds.max),
        )?;
        Ok(Config {
            bounds,
            log_config: log_config.unwrap_or(self.log_config),
        })
    }
}

fn read_prefix<F>(lookup: &F, key: &str) -> Result<Option<u8>, CidrError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<u8>()
            .map(Some)
            .map_err(|_| CidrError::Config(format!("{key}={value} is not a prefix length"))),
        None => Ok(None),
    }
}
