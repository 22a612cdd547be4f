// src/config.rs
use crate::domain::filter::DEFAULT_PRICE_CEILING;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Root of the listings REST API, e.g. "https://api.basafinder.com/api".
    pub api_base: Url,
    pub max_workers: usize,
    pub api_timeout: Duration,
    /// Top of the price slider and the default max price.
    pub price_ceiling: u64,
}

impl Config {
    /// Read `BASAFINDER_*` variables (after loading `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = parse_var(&lookup, "BASAFINDER_ADDR", "127.0.0.1:3000", |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;

        let api_base = parse_var(
            &lookup,
            "BASAFINDER_API_BASE",
            "http://localhost:5000/api",
            |v| {
                let url = Url::parse(v).map_err(|e| e.to_string())?;
                if url.cannot_be_a_base() {
                    return Err("not an http(s) base URL".into());
                }
                Ok(url)
            },
        )?;

        let max_workers = parse_var(&lookup, "BASAFINDER_WORKERS", "8", |v| {
            match v.parse::<usize>() {
                Ok(0) => Err("must be at least 1".into()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            }
        })?;

        let api_timeout = parse_var(&lookup, "BASAFINDER_API_TIMEOUT_SECS", "15", |v| {
            v.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| e.to_string())
        })?;

        let price_ceiling = parse_var(
            &lookup,
            "BASAFINDER_PRICE_CEILING",
            &DEFAULT_PRICE_CEILING.to_string(),
            |v| match v.parse::<u64>() {
                Ok(0) => Err("must be greater than zero".into()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            },
        )?;

        Ok(Self {
            addr,
            api_base,
            max_workers,
            api_timeout,
            price_ceiling,
        })
    }
}

/// Parse `key`, or `default` when it's unset or blank.
fn parse_var<F, T, P>(
    lookup: &F,
    key: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Result<T, String>,
{
    let raw = lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    parse(raw.trim()).map_err(|reason| ConfigError::Invalid {
        key,
        value: raw,
        reason,
    })
}
