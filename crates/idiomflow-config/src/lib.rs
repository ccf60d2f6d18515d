use std::env;

use serde::{Deserialize, Serialize};

use self::catalog::CatalogConfig;
use self::log::LogConfig;

pub mod catalog;
pub mod log;

pub use self::log::LogFormat;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

impl Config {
    /// Read configuration from the process environment
    pub fn new() -> Self {
        Config {
            catalog: CatalogConfig::new(),
            log: LogConfig::new(),
        }
    }
}

/// Parse a boolean environment variable, `None` when unset or unrecognized
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
