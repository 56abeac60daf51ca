use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_POOL_MIN: u32 = 1;
const DEFAULT_POOL_MAX: u32 = 3;
const DEFAULT_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 60;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub pool_min_connections: u32,
    pub pool_max_connections: u32,
    pub pool_acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable present or defaulted and parsable
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing, a value unparsable, or the
    ///   pool minimum above the maximum
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let pool_min_connections = parse_var(&lookup, "DB_POOL_MIN", DEFAULT_POOL_MIN)?;
        let pool_max_connections = parse_var(&lookup, "DB_POOL_MAX", DEFAULT_POOL_MAX)?;
        if pool_min_connections > pool_max_connections {
            return Err(ConfigError::InvalidEnvVar {
                name: "DB_POOL_MIN".to_string(),
                value: pool_min_connections.to_string(),
                reason: format!("exceeds DB_POOL_MAX ({})", pool_max_connections),
            }
            .into());
        }

        let acquire_timeout_secs = parse_var(
            &lookup,
            "DB_POOL_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_POOL_ACQUIRE_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url,
            bind_addr,
            pool_min_connections,
            pool_max_connections,
            pool_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}
