//! Configuration loading and representation.
//!
//! Everything comes from environment variables with defaults that reproduce a
//! plain local setup (`items.txt`/`sales.txt` in the working directory).

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const ENV_DATA_DIR: &str = "STOCKROOM_DATA_DIR";
pub const ENV_ITEMS_FILE: &str = "STOCKROOM_ITEMS_FILE";
pub const ENV_SALES_FILE: &str = "STOCKROOM_SALES_FILE";
pub const ENV_BIND_ADDR: &str = "STOCKROOM_BIND_ADDR";

const DEFAULT_ITEMS_FILE: &str = "items.txt";
const DEFAULT_SALES_FILE: &str = "sales.txt";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:81";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub data_dir: PathBuf,
    pub items_file: PathBuf,
    pub sales_file: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ShopConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            data_dir: get(ENV_DATA_DIR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            items_file: get(ENV_ITEMS_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ITEMS_FILE)),
            sales_file: get(ENV_SALES_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SALES_FILE)),
            bind_addr,
        })
    }

    /// Keep the default file names but point them at `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            items_file: PathBuf::from(DEFAULT_ITEMS_FILE),
            sales_file: PathBuf::from(DEFAULT_SALES_FILE),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 81)),
        }
    }

    /// Item file path. An absolute `items_file` wins over `data_dir`.
    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(&self.items_file)
    }

    /// Sales file path. An absolute `sales_file` wins over `data_dir`.
    pub fn sales_path(&self) -> PathBuf {
        self.data_dir.join(&self.sales_file)
    }
}
