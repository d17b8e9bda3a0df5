// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use nutri_core::config::DEFAULT_DATA_DIR;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

pub const ENV_BIND_ADDR: &str = "NUTRI_BIND_ADDR";
pub const ENV_DATA_DIR: &str = "NUTRI_DATA_DIR";
pub const ENV_CORS_ORIGIN: &str = "NUTRI_CORS_ORIGIN";

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding one JSON file per entity.
    pub data_dir: PathBuf,
    /// Browser origin allowed by CORS.
    pub cors_origin: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by `NUTRI_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = parse_or(ENV_BIND_ADDR, &raw, cfg.bind_addr);
        }
        if let Some(raw) = lookup(ENV_DATA_DIR) {
            if raw.trim().is_empty() {
                tracing::warn!("{} is empty, using {:?}", ENV_DATA_DIR, cfg.data_dir);
            } else {
                cfg.data_dir = PathBuf::from(raw);
            }
        }
        if let Some(raw) = lookup(ENV_CORS_ORIGIN) {
            if raw.trim().is_empty() {
                tracing::warn!("{} is empty, using {}", ENV_CORS_ORIGIN, cfg.cors_origin);
            } else {
                cfg.cors_origin = raw.trim().to_string();
            }
        }

        cfg
    }
}

fn parse_or<T: FromStr + std::fmt::Debug>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: unparsable, using {:?}", key, raw, default);
            default
        }
    }
}
