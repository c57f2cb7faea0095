//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::network::CacheConfig;
use crate::transfer::TransferConfig;

/// Directory holding `bus_stops.json`, `bus_routes.json` and optionally
/// `train_stations.csv`.
pub const DATA_DIR_VAR: &str = "BUS_DATA_DIR";
/// Address to listen on.
pub const ADDR_VAR: &str = "BUS_SERVER_ADDR";
/// Default total walking budget for transfer searches.
pub const WALK_BUDGET_VAR: &str = "BUS_WALK_BUDGET_METRES";
/// How long a fetched route stays cached.
pub const CACHE_TTL_VAR: &str = "BUS_ROUTE_CACHE_SECS";

/// Error reading configuration.
#[derive(Debug, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub addr: SocketAddr,
    pub transfer: TransferConfig,
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            transfer: TransferConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(addr) = parsed(&lookup, ADDR_VAR)? {
            config.addr = addr;
        }
        if let Some(budget) = parsed(&lookup, WALK_BUDGET_VAR)? {
            config.transfer.default_budget_metres = budget;
        }
        if let Some(secs) = parsed(&lookup, CACHE_TTL_VAR)? {
            config.cache.ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError {
            var,
            value,
            reason: e.to_string(),
        })
}
